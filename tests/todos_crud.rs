#[cfg(test)]
mod tests {
    use chrono::Utc;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todos::db::error::TodoError;
    use todos::db::todos::Todos;

    struct StoreTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
        todos: Todos,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("todos.db");
            let todos = Todos::open(&db_path).unwrap();
            StoreTestContext {
                _temp_dir: temp_dir,
                db_path,
                todos,
            }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_returns_fresh_id_and_lists_task(ctx: &mut StoreTestContext) {
        let first = ctx.todos.add("Write report").unwrap();
        let second = ctx.todos.add("Review code").unwrap();
        assert_ne!(first, second);

        let all = ctx.todos.list_all().unwrap();
        let added = all.iter().find(|todo| todo.id == first).unwrap();
        assert_eq!(added.title, "Write report");
        assert!(!added.completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_trims_title(ctx: &mut StoreTestContext) {
        let id = ctx.todos.add("   Buy bread \t").unwrap();

        let todo = ctx.todos.get(id).unwrap().unwrap();
        assert_eq!(todo.title, "Buy bread");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_rejects_blank_title(ctx: &mut StoreTestContext) {
        assert!(matches!(ctx.todos.add(""), Err(TodoError::EmptyTitle)));
        assert!(matches!(ctx.todos.add("   "), Err(TodoError::EmptyTitle)));
        assert!(matches!(ctx.todos.add("\n\t"), Err(TodoError::EmptyTitle)));

        assert!(ctx.todos.list_all().unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_list_all_is_newest_first(ctx: &mut StoreTestContext) {
        let a = ctx.todos.add("A").unwrap();
        let b = ctx.todos.add("B").unwrap();
        let c = ctx.todos.add("C").unwrap();

        let all = ctx.todos.list_all().unwrap();
        let ids: Vec<i64> = all.iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![c, b, a]);

        for pair in all.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_created_at_is_stored_in_utc(ctx: &mut StoreTestContext) {
        let before = Utc::now().naive_utc();
        let id = ctx.todos.add("Stamp me").unwrap();
        let after = Utc::now().naive_utc();

        let created_at = ctx.todos.get(id).unwrap().unwrap().created_at;
        assert!(before <= created_at && created_at <= after);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_toggle_flips_and_restores(ctx: &mut StoreTestContext) {
        let id = ctx.todos.add("Water plants").unwrap();

        assert!(ctx.todos.toggle(id).unwrap());
        assert!(ctx.todos.get(id).unwrap().unwrap().completed);

        assert!(ctx.todos.toggle(id).unwrap());
        assert!(!ctx.todos.get(id).unwrap().unwrap().completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_toggle_missing_id_changes_nothing(ctx: &mut StoreTestContext) {
        let id = ctx.todos.add("Water plants").unwrap();
        let before = ctx.todos.list_all().unwrap();

        assert!(!ctx.todos.toggle(id + 100).unwrap());
        assert_eq!(ctx.todos.list_all().unwrap(), before);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_is_permanent(ctx: &mut StoreTestContext) {
        let keep = ctx.todos.add("Keep me").unwrap();
        let drop = ctx.todos.add("Drop me").unwrap();

        assert!(ctx.todos.delete(drop).unwrap());
        let ids: Vec<i64> = ctx.todos.list_all().unwrap().iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![keep]);

        assert!(!ctx.todos.delete(drop).unwrap());
        assert!(ctx.todos.get(drop).unwrap().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_ids_are_not_reused_after_delete(ctx: &mut StoreTestContext) {
        let first = ctx.todos.add("First").unwrap();
        let second = ctx.todos.add("Second").unwrap();
        assert!(ctx.todos.delete(second).unwrap());

        let third = ctx.todos.add("Third").unwrap();
        assert!(third > second);
        assert_ne!(third, first);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_data_survives_reopen(ctx: &mut StoreTestContext) {
        let id = ctx.todos.add("Persisted").unwrap();
        ctx.todos.toggle(id).unwrap();

        let reopened = Todos::open(&ctx.db_path).unwrap();
        let all = reopened.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert!(all[0].completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_buy_milk_scenario(ctx: &mut StoreTestContext) {
        assert!(ctx.todos.list_all().unwrap().is_empty());

        let id = ctx.todos.add("Buy milk").unwrap();
        assert_eq!(id, 1);

        let all = ctx.todos.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[0].title, "Buy milk");
        assert!(!all[0].completed);

        assert!(ctx.todos.toggle(1).unwrap());
        assert!(ctx.todos.list_all().unwrap()[0].completed);

        assert!(ctx.todos.delete(1).unwrap());
        assert!(ctx.todos.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_open_creates_missing_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("nested").join("dir").join("todos.db");

        let todos = Todos::open(&db_path).unwrap();
        todos.add("Anything").unwrap();

        assert!(db_path.exists());
        assert_eq!(todos.path(), db_path.as_path());
    }
}
