use super::*;

inventory::submit! {
    CommandRegistration {
        command: "list",
        handler: list_command,
        suggester: list_suggestions,
    }
}

/// Syntax: /[parent] list [player]
fn list_command(ctx: &ClientCommand) -> CommandResult {
    call_handler(ctx, &handle_list, ctx.args())
}

/// Open a friend-list view for the invoker, or for another named player when
/// one is given and the invoker holds the configured see-any permission.
fn handle_list(server: &Roster, source: UserSource, args: ArgList) -> CommandResult {
    let list_section = server.config().get_section("list");

    // A second argument only selects another player when the see-any
    // permission is both declared and held; otherwise it is ignored and the
    // invoker gets their own list.
    if args.len() >= 2
        && server
            .policy()
            .can_view_other(&*source, &list_section)
            .is_ok()
    {
        let Some(database) = server.database() else {
            return Ok(CommandStatus::DatabaseDisabled);
        };

        let Some(owner_name) = args.get(1) else {
            return Err(CommandError::NotEnoughParameters);
        };

        if !database.contains(owner_name) {
            source.send_message(
                &list_section.get_string(messages::NOT_FOUND_KEY, messages::DEFAULT_NOT_FOUND),
            );
            return Ok(CommandStatus::Completed);
        }

        // First match wins if the store holds duplicate names
        let Some(record) = database.records_by_name(owner_name).into_iter().next() else {
            source.send_message(
                &list_section.get_string(messages::NOT_FOUND_KEY, messages::DEFAULT_NOT_FOUND),
            );
            return Ok(CommandStatus::Completed);
        };

        if let Err(err) = server
            .views()
            .open_friend_list(&list_section, &*source, record.id)
        {
            source.send_message(
                &list_section.get_string(messages::OPEN_ERROR_KEY, messages::DEFAULT_OPEN_ERROR),
            );
            tracing::warn!(error = %err, owner = %record.name, "Couldn't open another player's friend list view");
        }
        return Ok(CommandStatus::Completed);
    }

    if let Err(err) = server
        .views()
        .open_friend_list(&list_section, &*source, source.id())
    {
        source.send_message(
            &list_section.get_string(messages::OPEN_ERROR_KEY, messages::DEFAULT_OPEN_ERROR),
        );
        tracing::warn!(error = %err, "Couldn't open own friend list view");
    }

    Ok(CommandStatus::Completed)
}

/// Tab completion offers every stored player name, unless the invoker is
/// barred from browsing other players or the store is disabled.
fn list_suggestions(ctx: &ClientCommand) -> Option<Vec<String>> {
    let CommandSource::Player(user) = ctx.source() else {
        return None;
    };

    let list_section = ctx.server().config().get_section("list");

    if !ctx.server().policy().can_browse_players(user, &list_section) {
        return None;
    }

    let database = ctx.server().database()?;
    Some(
        database
            .all_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::command::test_support::*;

    fn invoke(server: &Arc<Roster>, user: &Arc<TestUser>, args: &[&str]) -> CommandStatus {
        let ctx = ClientCommand::new(
            Arc::clone(server),
            Some(Arc::clone(user) as Arc<dyn User>),
            "list",
            args.iter().map(|s| s.to_string()).collect(),
        );
        CommandDispatcher::new().dispatch_command(&ctx)
    }

    #[test]
    fn opens_own_view_with_no_target_argument() {
        let harness = harness_with_players(config_with_node(), &["Somebody"]);
        let user = Arc::new(TestUser::new("Invoker").with_permission(SEE_ANY));

        let status = invoke(&harness.server, &user, &["list"]);

        assert_eq!(status, CommandStatus::Completed);
        assert_eq!(
            harness.views.opened(),
            vec![("Invoker".to_string(), user.id())]
        );
        assert!(user.sent_messages().is_empty());
    }

    #[test]
    fn opens_own_view_when_node_undeclared() {
        let harness = harness_with_players(config_without_node(), &["Target"]);
        let user = Arc::new(TestUser::new("Invoker").with_permission(SEE_ANY));

        let status = invoke(&harness.server, &user, &["list", "Target"]);

        assert_eq!(status, CommandStatus::Completed);
        assert_eq!(
            harness.views.opened(),
            vec![("Invoker".to_string(), user.id())]
        );
    }

    #[test]
    fn opens_own_view_without_the_permission() {
        let harness = harness_with_players(config_with_node(), &["Target"]);
        let user = Arc::new(TestUser::new("Invoker"));

        let status = invoke(&harness.server, &user, &["list", "Target"]);

        assert_eq!(status, CommandStatus::Completed);
        assert_eq!(
            harness.views.opened(),
            vec![("Invoker".to_string(), user.id())]
        );
    }

    #[test]
    fn reports_database_disabled_for_cross_player_lookup() {
        let harness = harness(config_with_node(), None, RecordingViewFactory::default());
        let user = Arc::new(TestUser::new("Invoker").with_permission(SEE_ANY));

        let status = invoke(&harness.server, &user, &["list", "Target"]);

        assert_eq!(status, CommandStatus::DatabaseDisabled);
        assert!(harness.views.opened().is_empty());
        assert!(user.sent_messages().is_empty());
    }

    #[test]
    fn sends_not_found_for_an_unknown_target() {
        let harness = harness_with_players(config_with_node(), &["Somebody"]);
        let user = Arc::new(TestUser::new("Invoker").with_permission(SEE_ANY));

        let status = invoke(&harness.server, &user, &["list", "Stranger"]);

        assert_eq!(status, CommandStatus::Completed);
        assert!(harness.views.opened().is_empty());
        assert_eq!(
            user.sent_messages(),
            vec![messages::DEFAULT_NOT_FOUND.to_string()]
        );
    }

    #[test]
    fn sends_configured_not_found_template_verbatim() {
        let config = ConfigSection::parse(
            r#"{
                list: {
                    permission_see_any: "roster.friends.seeany",
                    not_found: "{error_colour}Nobody by that name here.",
                },
            }"#,
        )
        .unwrap();
        let harness = harness_with_players(config, &[]);
        let user = Arc::new(TestUser::new("Invoker").with_permission(SEE_ANY));

        invoke(&harness.server, &user, &["list", "Stranger"]);

        assert_eq!(
            user.sent_messages(),
            vec!["{error_colour}Nobody by that name here.".to_string()]
        );
    }

    #[test]
    fn opens_target_view_bound_to_the_record_id() {
        let database = Arc::new(TestDatabase::default());
        let friend_id = database.push(record("Friend")).id;
        let harness = harness(
            config_with_node(),
            Some(database),
            RecordingViewFactory::default(),
        );
        let user = Arc::new(TestUser::new("Invoker").with_permission(SEE_ANY));

        let status = invoke(&harness.server, &user, &["list", "Friend"]);

        assert_eq!(status, CommandStatus::Completed);
        assert_eq!(
            harness.views.opened(),
            vec![("Invoker".to_string(), friend_id)]
        );
        assert!(user.sent_messages().is_empty());
    }

    #[test]
    fn first_match_wins_on_duplicate_names() {
        let database = Arc::new(TestDatabase::default());
        let first = database.push(record("Twin"));
        database.push(record("Twin"));

        let harness = harness(
            config_with_node(),
            Some(database),
            RecordingViewFactory::default(),
        );
        let user = Arc::new(TestUser::new("Invoker").with_permission(SEE_ANY));

        invoke(&harness.server, &user, &["list", "Twin"]);

        assert_eq!(
            harness.views.opened(),
            vec![("Invoker".to_string(), first.id)]
        );
    }

    #[test]
    fn reports_open_failure_for_own_view() {
        init_tracing();
        let harness = harness(config_without_node(), None, RecordingViewFactory::failing());
        let user = Arc::new(TestUser::new("Invoker"));

        let status = invoke(&harness.server, &user, &["list"]);

        assert_eq!(status, CommandStatus::Completed);
        assert_eq!(
            user.sent_messages(),
            vec![messages::DEFAULT_OPEN_ERROR.to_string()]
        );
    }

    #[test]
    fn reports_open_failure_for_target_view_with_configured_template() {
        init_tracing();
        let config = ConfigSection::parse(
            r#"{
                list: {
                    permission_see_any: "roster.friends.seeany",
                    error: "{error_colour}The view service is down.",
                },
            }"#,
        )
        .unwrap();
        let database = Arc::new(TestDatabase::default());
        database.push(record("Friend"));
        let harness = harness(config, Some(database), RecordingViewFactory::failing());
        let user = Arc::new(TestUser::new("Invoker").with_permission(SEE_ANY));

        let status = invoke(&harness.server, &user, &["list", "Friend"]);

        assert_eq!(status, CommandStatus::Completed);
        assert_eq!(
            user.sent_messages(),
            vec!["{error_colour}The view service is down.".to_string()]
        );
    }

    #[test]
    fn console_invocation_requires_a_player() {
        let harness = harness_with_players(config_with_node(), &["Somebody"]);
        let ctx = ClientCommand::new(
            Arc::clone(&harness.server),
            None,
            "list",
            vec!["list".to_string()],
        );

        let status = CommandDispatcher::new().dispatch_command(&ctx);

        assert_eq!(status, CommandStatus::RequiresPlayer);
        assert!(harness.views.opened().is_empty());
    }

    #[test]
    fn command_lookup_ignores_case() {
        let harness = harness_with_players(config_without_node(), &[]);
        let user = Arc::new(TestUser::new("Invoker"));
        let ctx = ClientCommand::new(
            Arc::clone(&harness.server),
            Some(Arc::clone(&user) as Arc<dyn User>),
            "LIST",
            vec!["LIST".to_string()],
        );

        let status = CommandDispatcher::new().dispatch_command(&ctx);

        assert_eq!(status, CommandStatus::Completed);
        assert_eq!(harness.views.opened().len(), 1);
    }

    #[test]
    fn unknown_command_notifies_and_completes() {
        let harness = harness_with_players(config_without_node(), &[]);
        let user = Arc::new(TestUser::new("Invoker"));
        let ctx = ClientCommand::new(
            Arc::clone(&harness.server),
            Some(Arc::clone(&user) as Arc<dyn User>),
            "befriend",
            vec!["befriend".to_string()],
        );

        let status = CommandDispatcher::new().dispatch_command(&ctx);

        assert_eq!(status, CommandStatus::Completed);
        assert_eq!(
            user.sent_messages(),
            vec![messages::UNKNOWN_COMMAND.to_string()]
        );
        assert!(harness.views.opened().is_empty());
    }

    mod suggestions {
        use super::*;
        use pretty_assertions::assert_eq;

        fn resolve(server: &Arc<Roster>, user: Option<&Arc<TestUser>>) -> Option<Vec<String>> {
            let ctx = ClientCommand::new(
                Arc::clone(server),
                user.map(|u| Arc::clone(u) as Arc<dyn User>),
                "list",
                vec!["list".to_string()],
            );
            CommandDispatcher::new().resolve_suggestions(&ctx)
        }

        #[test]
        fn none_when_the_database_is_disabled() {
            let harness = harness(
                config_without_node(),
                None,
                RecordingViewFactory::default(),
            );
            let user = Arc::new(TestUser::new("Invoker"));
            assert_eq!(resolve(&harness.server, Some(&user)), None);
        }

        #[test]
        fn none_when_the_node_is_declared_and_lacking() {
            let harness = harness_with_players(config_with_node(), &["Somebody"]);
            let user = Arc::new(TestUser::new("Invoker"));
            assert_eq!(resolve(&harness.server, Some(&user)), None);
        }

        #[test]
        fn none_for_a_console_caller() {
            let harness = harness_with_players(config_without_node(), &["Somebody"]);
            assert_eq!(resolve(&harness.server, None), None);
        }

        #[test]
        fn all_names_when_the_permission_is_held() {
            let harness = harness_with_players(config_with_node(), &["Alpha", "Beta"]);
            let user = Arc::new(TestUser::new("Invoker").with_permission(SEE_ANY));
            assert_eq!(
                resolve(&harness.server, Some(&user)),
                Some(vec!["Alpha".to_string(), "Beta".to_string()])
            );
        }

        #[test]
        fn all_names_when_the_node_is_undeclared() {
            let harness = harness_with_players(config_without_node(), &["Alpha", "Beta"]);
            let user = Arc::new(TestUser::new("Invoker"));
            assert_eq!(
                resolve(&harness.server, Some(&user)),
                Some(vec!["Alpha".to_string(), "Beta".to_string()])
            );
        }
    }
}
