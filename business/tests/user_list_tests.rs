//! User list flows driven through a `StateCtx` with an in-process fetcher.

mod common;

use common::{emails, loaded_ctx, mock_ctx, response, sample_users, settle};
use roster_business::{
    LoadUsersCompute, LoadUsersResult, SortBy, User, UserListActions, UserListIntent,
    VisibleUsersCompute,
};
use ustr::Ustr;

mod load_tests {
    use super::*;

    #[test]
    fn test_load_is_fire_and_forget() {
        let (mut ctx, fetcher) = mock_ctx();

        ctx.load_initial_users();
        settle(&mut ctx);

        assert_eq!(fetcher.pending_count(), 1);
        assert!(ctx.cached::<LoadUsersCompute>().unwrap().is_pending());
        assert!(ctx.user_list().users().is_empty());
        assert!(ctx.visible_users().is_empty());
    }

    #[test]
    fn test_load_requests_configured_batch_size() {
        let (mut ctx, fetcher) = mock_ctx();
        ctx.load_initial_users();
        assert_eq!(fetcher.requested_urls(), vec!["http://mock/api/?results=100"]);
    }

    #[test]
    fn test_load_sets_working_set_and_pristine_copy() {
        let ctx = loaded_ctx();

        let state = ctx.user_list();
        assert_eq!(state.users(), sample_users().as_slice());
        assert_eq!(state.original_users(), sample_users().as_slice());
        assert_eq!(emails(ctx.visible_users()), emails(&sample_users()));

        match &ctx.cached::<LoadUsersCompute>().unwrap().result {
            LoadUsersResult::Loaded { count, .. } => assert_eq!(*count, 5),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_fetch_leaves_lists_empty() {
        let (mut ctx, fetcher) = mock_ctx();
        ctx.load_initial_users();
        fetcher.respond(Ok(response(500, b"oops".to_vec())));
        settle(&mut ctx);

        assert!(ctx.user_list().users().is_empty());
        assert!(!ctx.user_list().is_loaded());
        let status = ctx.cached::<LoadUsersCompute>().unwrap();
        assert!(status.error_message().unwrap().contains("500"));

        ctx.reset_users();
        settle(&mut ctx);
        assert!(ctx.visible_users().is_empty());
    }

    #[test]
    fn test_transport_error_is_reported() {
        let (mut ctx, fetcher) = mock_ctx();
        ctx.load_initial_users();
        fetcher.respond(Err("dns failure".to_string()));
        settle(&mut ctx);

        let status = ctx.cached::<LoadUsersCompute>().unwrap();
        assert!(status.error_message().unwrap().contains("dns failure"));
    }

    #[test]
    fn test_response_after_context_drop_is_ignored() {
        let (mut ctx, fetcher) = mock_ctx();
        ctx.load_initial_users();
        drop(ctx);

        // Must not panic or write anywhere.
        fetcher.respond_with_users(&sample_users());
        assert_eq!(fetcher.pending_count(), 0);
    }

    #[test]
    fn test_superseded_load_result_is_dropped() {
        let (mut ctx, fetcher) = mock_ctx();
        ctx.load_initial_users();
        ctx.load_initial_users();
        assert_eq!(fetcher.pending_count(), 2);

        let stale = vec![sample_users()[0].clone()];
        fetcher.respond_with_users(&stale);
        settle(&mut ctx);
        assert!(ctx.user_list().users().is_empty());

        fetcher.respond_with_users(&sample_users());
        settle(&mut ctx);
        assert_eq!(ctx.user_list().users().len(), 5);
    }

    #[test]
    fn test_load_after_success_does_not_refetch() {
        let (mut ctx, fetcher) = mock_ctx();
        ctx.load_initial_users();
        fetcher.respond_with_users(&sample_users());
        settle(&mut ctx);

        ctx.load_initial_users();
        settle(&mut ctx);

        assert_eq!(fetcher.pending_count(), 0);
        assert_eq!(ctx.user_list().original_users(), sample_users().as_slice());
        match &ctx.cached::<LoadUsersCompute>().unwrap().result {
            LoadUsersResult::Loaded { count, .. } => assert_eq!(*count, 5),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_load_after_failure_retries() {
        let (mut ctx, fetcher) = mock_ctx();
        ctx.load_initial_users();
        fetcher.respond(Ok(response(500, Vec::new())));
        settle(&mut ctx);

        ctx.load_initial_users();
        assert_eq!(fetcher.pending_count(), 1);
        fetcher.respond_with_users(&sample_users());
        settle(&mut ctx);

        assert!(ctx.cached::<LoadUsersCompute>().unwrap().is_loaded());
        assert_eq!(ctx.user_list().users().len(), 5);
    }
}

mod view_tests {
    use super::*;

    #[test]
    fn test_sort_by_each_column() {
        let mut ctx = loaded_ctx();

        ctx.set_sorting(SortBy::Country);
        settle(&mut ctx);
        assert_eq!(
            emails(ctx.visible_users()),
            vec!["bob@x.com", "adam@x.com", "emile@x.com", "zoe@x.com", "ines@x.com"]
        );

        ctx.set_sorting(SortBy::Name);
        settle(&mut ctx);
        assert_eq!(
            emails(ctx.visible_users()),
            vec!["adam@x.com", "bob@x.com", "emile@x.com", "ines@x.com", "zoe@x.com"]
        );

        ctx.set_sorting(SortBy::Last);
        settle(&mut ctx);
        assert_eq!(
            emails(ctx.visible_users()),
            vec!["bob@x.com", "zoe@x.com", "emile@x.com", "ines@x.com", "adam@x.com"]
        );

        // Sorting never reorders the working set.
        assert_eq!(emails(ctx.user_list().users()), emails(&sample_users()));
    }

    #[test]
    fn test_toggle_sort_by_country_round_trip() {
        let mut ctx = loaded_ctx();

        ctx.toggle_sort_by_country();
        settle(&mut ctx);
        assert_eq!(ctx.user_list().sorting(), SortBy::Country);
        assert_eq!(ctx.visible_users()[0].email, "bob@x.com");

        ctx.toggle_sort_by_country();
        settle(&mut ctx);
        assert_eq!(ctx.user_list().sorting(), SortBy::None);
        assert_eq!(emails(ctx.visible_users()), emails(&sample_users()));
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut ctx = loaded_ctx();

        ctx.set_filter_country("AN");
        settle(&mut ctx);
        assert_eq!(emails(ctx.visible_users()), vec!["emile@x.com"]);

        ctx.set_filter_country("a");
        settle(&mut ctx);
        assert_eq!(ctx.visible_users().len(), 5);

        ctx.set_filter_country("");
        settle(&mut ctx);
        assert_eq!(ctx.visible_users().len(), 5);
        assert_eq!(ctx.user_list().filter_country(), Some(""));
    }

    #[test]
    fn test_filter_then_sort() {
        let mut ctx = loaded_ctx();
        ctx.set_filter_country("ra");
        ctx.set_sorting(SortBy::Name);
        settle(&mut ctx);

        assert_eq!(
            emails(ctx.visible_users()),
            vec!["adam@x.com", "bob@x.com", "emile@x.com"]
        );
    }

    #[test]
    fn test_filter_then_country_sort_keeps_equal_keys_in_order() {
        let (mut ctx, fetcher) = mock_ctx();
        ctx.load_initial_users();
        fetcher.respond_with_users(&[
            User::new("1@x.com", "A", "A", "Spain", ""),
            User::new("2@x.com", "B", "B", "France", ""),
            User::new("3@x.com", "C", "C", "spain", ""),
        ]);
        settle(&mut ctx);

        ctx.set_filter_country("spa");
        settle(&mut ctx);
        assert_eq!(emails(ctx.visible_users()), vec!["1@x.com", "3@x.com"]);

        ctx.set_sorting(SortBy::Country);
        settle(&mut ctx);
        assert_eq!(emails(ctx.visible_users()), vec!["1@x.com", "3@x.com"]);
    }

    #[test]
    fn test_setting_same_filter_twice_equals_once() {
        let mut ctx = loaded_ctx();
        ctx.set_filter_country("ra");
        settle(&mut ctx);
        let once = emails(ctx.visible_users())
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();

        ctx.set_filter_country("ra");
        settle(&mut ctx);
        assert_eq!(emails(ctx.visible_users()), once);
    }

    #[test]
    fn test_toggle_colors_does_not_touch_rows() {
        let mut ctx = loaded_ctx();
        ctx.toggle_colors();
        settle(&mut ctx);
        assert!(ctx.user_list().show_colors());
        assert_eq!(ctx.visible_users().len(), 5);

        ctx.toggle_colors();
        settle(&mut ctx);
        assert!(!ctx.user_list().show_colors());
    }
}

mod edit_tests {
    use super::*;

    #[test]
    fn test_delete_removes_only_that_user() {
        let mut ctx = loaded_ctx();
        ctx.delete_user("emile@x.com");
        settle(&mut ctx);

        assert_eq!(
            emails(ctx.user_list().users()),
            vec!["zoe@x.com", "adam@x.com", "bob@x.com", "ines@x.com"]
        );
        assert_eq!(ctx.user_list().original_users().len(), 5);
        assert_eq!(ctx.cached::<VisibleUsersCompute>().unwrap().len(), 4);
    }

    #[test]
    fn test_delete_unknown_email_is_noop() {
        let mut ctx = loaded_ctx();
        ctx.delete_user("nobody@x.com");
        settle(&mut ctx);
        assert_eq!(ctx.user_list().users().len(), 5);
    }

    #[test]
    fn test_delete_while_filtered_and_sorted_updates_view() {
        let mut ctx = loaded_ctx();
        ctx.set_filter_country("ra");
        ctx.set_sorting(SortBy::Last);
        settle(&mut ctx);
        assert_eq!(
            emails(ctx.visible_users()),
            vec!["bob@x.com", "emile@x.com", "adam@x.com"]
        );

        ctx.apply_intent(UserListIntent::Delete(Ustr::from("bob@x.com")));
        settle(&mut ctx);
        assert_eq!(emails(ctx.visible_users()), vec!["emile@x.com", "adam@x.com"]);
    }

    #[test]
    fn test_reset_restores_original_order_and_keeps_view_settings() {
        let mut ctx = loaded_ctx();
        ctx.toggle_colors();
        ctx.apply_intent(UserListIntent::Sort(SortBy::Name));
        ctx.delete_user("zoe@x.com");
        ctx.delete_user("adam@x.com");
        settle(&mut ctx);
        assert_eq!(ctx.visible_users().len(), 3);

        ctx.reset_users();
        settle(&mut ctx);

        assert_eq!(ctx.user_list().users(), sample_users().as_slice());
        assert!(ctx.user_list().show_colors());
        assert_eq!(ctx.user_list().sorting(), SortBy::Name);
        assert_eq!(ctx.visible_users()[0].email, "adam@x.com");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut ctx = loaded_ctx();
        ctx.delete_user("bob@x.com");
        ctx.reset_users();
        ctx.reset_users();
        settle(&mut ctx);
        assert_eq!(ctx.user_list().users(), sample_users().as_slice());
    }
}
