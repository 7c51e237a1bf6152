mod common;

#[cfg(test)]
mod tests {
    use crate::common::task;
    use taskboard::libs::filter::{visible_tasks, CompletionFilter, FilterState, OwnershipFilter};
    use taskboard::libs::task::{Id, Task};

    const OWNERSHIP: [OwnershipFilter; 2] = [OwnershipFilter::All, OwnershipFilter::Mine];
    const COMPLETION: [CompletionFilter; 3] = [CompletionFilter::All, CompletionFilter::Completed, CompletionFilter::Pending];

    /// A mixed collection: three owners, alternating completion.
    fn mixed() -> Vec<Task> {
        (1..=12).map(|id| task(id, id % 3 + 6, id % 2 == 0)).collect()
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_scenario_mine_pending() {
        let tasks = vec![task(1, 7, false), task(2, 8, false), task(3, 7, true)];
        let visible = visible_tasks(&tasks, OwnershipFilter::Mine, CompletionFilter::Pending, &Id::from(7));
        assert_eq!(ids(&visible), vec!["1"]);
    }

    #[test]
    fn test_scenario_all_all() {
        let tasks = vec![task(1, 7, false), task(2, 8, false), task(3, 7, true)];
        let visible = visible_tasks(&tasks, OwnershipFilter::All, CompletionFilter::All, &Id::from(7));
        assert_eq!(ids(&visible), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_visible_is_ordered_subset() {
        let tasks = mixed();
        let viewer = Id::from(7);
        for ownership in OWNERSHIP {
            for completion in COMPLETION {
                let visible = visible_tasks(&tasks, ownership, completion, &viewer);
                let positions: Vec<usize> = visible
                    .iter()
                    .map(|v| tasks.iter().position(|t| t.id == v.id).expect("visible task comes from input"))
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]), "{ownership}/{completion} reordered tasks");
            }
        }
    }

    #[test]
    fn test_predicates_hold_for_every_visible_task() {
        let tasks = mixed();
        let viewer = Id::from(7);
        for ownership in OWNERSHIP {
            for completion in COMPLETION {
                for t in visible_tasks(&tasks, ownership, completion, &viewer) {
                    if ownership == OwnershipFilter::Mine {
                        assert_eq!(t.user_id, viewer);
                    }
                    match completion {
                        CompletionFilter::Completed => assert!(t.completed),
                        CompletionFilter::Pending => assert!(!t.completed),
                        CompletionFilter::All => {}
                    }
                }
            }
        }
    }

    #[test]
    fn test_all_all_is_identity() {
        let tasks = mixed();
        let visible = visible_tasks(&tasks, OwnershipFilter::All, CompletionFilter::All, &Id::from(99));
        assert_eq!(visible.len(), tasks.len());
    }

    #[test]
    fn test_completed_and_pending_partition_the_collection() {
        let tasks = mixed();
        let viewer = Id::from(8);
        for ownership in OWNERSHIP {
            let all = visible_tasks(&tasks, ownership, CompletionFilter::All, &viewer).len();
            let done = visible_tasks(&tasks, ownership, CompletionFilter::Completed, &viewer).len();
            let pending = visible_tasks(&tasks, ownership, CompletionFilter::Pending, &viewer).len();
            assert_eq!(done + pending, all);
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let tasks = mixed();
        let viewer = Id::from(6);
        for ownership in OWNERSHIP {
            for completion in COMPLETION {
                let once: Vec<Task> = visible_tasks(&tasks, ownership, completion, &viewer).into_iter().cloned().collect();
                let twice = visible_tasks(&once, ownership, completion, &viewer);
                assert_eq!(ids(&twice), once.iter().map(|t| t.id.to_string()).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_empty_collection() {
        let visible = visible_tasks(&[], OwnershipFilter::Mine, CompletionFilter::Pending, &Id::from(1));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_string_and_numeric_ids_compare_equal() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[{"id": 1, "title": "a", "completed": false, "userId": "7"},
                {"id": "2", "title": "b", "completed": false, "userId": 8}]"#,
        )
        .unwrap();
        let visible = visible_tasks(&tasks, OwnershipFilter::Mine, CompletionFilter::All, &Id::from(7));
        assert_eq!(ids(&visible), vec!["1"]);
    }

    #[test]
    fn test_member_cannot_select_all() {
        let mut filters = FilterState::for_viewer(false);
        assert_eq!(filters.ownership(), OwnershipFilter::Mine);
        assert!(!filters.select_ownership(OwnershipFilter::All));
        assert_eq!(filters.ownership(), OwnershipFilter::Mine);
    }

    #[test]
    fn test_admin_toggles_ownership() {
        let mut filters = FilterState::for_viewer(true);
        assert_eq!(filters.ownership(), OwnershipFilter::All);
        assert!(filters.select_ownership(OwnershipFilter::Mine));
        assert!(!filters.select_ownership(OwnershipFilter::Mine));
        assert!(filters.select_ownership(OwnershipFilter::All));
    }

    #[test]
    fn test_filter_state_apply_matches_free_function() {
        let tasks = mixed();
        let viewer = Id::from(7);
        let mut filters = FilterState::for_viewer(true);
        filters.select_completion(CompletionFilter::Completed);
        assert_eq!(
            ids(&filters.apply(&tasks, &viewer)),
            ids(&visible_tasks(&tasks, OwnershipFilter::All, CompletionFilter::Completed, &viewer))
        );
    }
}
