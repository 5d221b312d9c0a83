//! Board Scenario Tests
//!
//! End-to-end scenarios on the default board plus property tests over
//! random operation sequences.

#[cfg(test)]
mod tests {
    use crate::persistence::{MemoryStore, Snapshot};
    use crate::seed::default_board;
    use crate::{Board, BoardConfig, BoardController, DragItem, Id};
    use proptest::prelude::*;

    fn status_ids(board: &Board) -> Vec<Id> {
        board.statuses().iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_delete_todo_column() {
        let mut ctl = BoardController::load(MemoryStore::new(), BoardConfig::default());
        ctl.delete_status(&Id::from("todo")).unwrap();

        let board = ctl.board();
        assert_eq!(status_ids(board), vec![Id::from("doing"), Id::from("completed")]);
        let remaining: Vec<(Id, &str)> = board
            .tasks()
            .iter()
            .map(|t| (t.status_id.clone(), t.content.as_str()))
            .collect();
        assert_eq!(
            remaining,
            vec![(Id::from("doing"), "Card 2"), (Id::from("completed"), "Card 3")]
        );
    }

    #[test]
    fn test_create_task_in_doing() {
        let mut ctl = BoardController::load(MemoryStore::new(), BoardConfig::default());
        let before = ctl.board().tasks().to_vec();

        let id = ctl.create_task(&Id::from("doing")).unwrap();

        let tasks = ctl.board().tasks();
        assert_eq!(tasks.len(), 6);
        assert_eq!(&tasks[..5], before.as_slice());
        assert_eq!(tasks[5].id, id);
        assert_eq!(tasks[5].status_id, Id::from("doing"));
        assert_eq!(tasks[5].content, "Card 6");
    }

    #[test]
    fn test_drag_card_across_columns_then_reload() {
        let store = MemoryStore::new();
        let mut ctl = BoardController::load(&store, BoardConfig::default());

        ctl.drag_start(&DragItem::Task(Id::from("2")));
        ctl.drag_over(&DragItem::Task(Id::from("5"))).unwrap();
        ctl.drag_end(Some(&DragItem::Task(Id::from("5")))).unwrap();

        let board = ctl.board().clone();
        for task in board.tasks() {
            let expected = if task.id == Id::from("2") {
                Id::from("completed")
            } else {
                default_board().task(&task.id).unwrap().status_id.clone()
            };
            assert_eq!(task.status_id, expected);
        }

        let reloaded = BoardController::load(&store, BoardConfig::default());
        assert_eq!(reloaded.board(), &board);
    }

    /// One random board operation
    #[derive(Debug, Clone)]
    enum Op {
        CreateStatus,
        DeleteStatus(usize),
        CreateTask(usize),
        DeleteTask(usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::CreateStatus),
            any::<usize>().prop_map(Op::DeleteStatus),
            any::<usize>().prop_map(Op::CreateTask),
            any::<usize>().prop_map(Op::DeleteTask),
        ]
    }

    /// Apply `op`, picking an existing entity by index when there is one.
    fn apply(board: &mut Board, op: &Op) {
        match op {
            Op::CreateStatus => {
                board.create_status();
            }
            Op::DeleteStatus(i) => {
                if let Some(id) = pick(&status_ids(board), *i) {
                    board.delete_status(&id).unwrap();
                }
            }
            Op::CreateTask(i) => {
                if let Some(id) = pick(&status_ids(board), *i) {
                    board.create_task(&id).unwrap();
                }
            }
            Op::DeleteTask(i) => {
                let ids: Vec<Id> = board.tasks().iter().map(|t| t.id.clone()).collect();
                if let Some(id) = pick(&ids, *i) {
                    board.delete_task(&id).unwrap();
                }
            }
        }
    }

    fn pick(ids: &[Id], i: usize) -> Option<Id> {
        if ids.is_empty() {
            None
        } else {
            Some(ids[i % ids.len()].clone())
        }
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        prop::collection::vec(arb_op(), 0..40).prop_map(|ops| {
            let mut board = default_board();
            for op in &ops {
                apply(&mut board, op);
            }
            board
        })
    }

    proptest! {
        #[test]
        fn prop_delete_status_cascades(board in arb_board(), pick_index in any::<usize>()) {
            let mut board = board;
            if let Some(id) = pick(&status_ids(&board), pick_index) {
                board.delete_status(&id).unwrap();
                prop_assert!(board.tasks().iter().all(|t| t.status_id != id));
                prop_assert!(board.status(&id).is_none());
            }
        }

        #[test]
        fn prop_create_task_bumps_one_column(board in arb_board(), pick_index in any::<usize>()) {
            let mut board = board;
            if let Some(id) = pick(&status_ids(&board), pick_index) {
                let before = board.task_counts();
                board.create_task(&id).unwrap();
                let after = board.task_counts();

                prop_assert_eq!(before.len(), after.len());
                for ((sid, old), (_, new)) in before.iter().zip(after.iter()) {
                    let expected = if sid == &id { old + 1 } else { *old };
                    prop_assert_eq!(*new, expected);
                }
            }
        }

        #[test]
        fn prop_generated_ids_stay_unique(board in arb_board()) {
            let mut ids: Vec<String> = board.statuses().iter().map(|s| s.id.to_string()).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), board.statuses().len());

            let mut task_ids: Vec<String> = board.tasks().iter().map(|t| t.id.to_string()).collect();
            task_ids.sort();
            task_ids.dedup();
            prop_assert_eq!(task_ids.len(), board.tasks().len());
        }

        #[test]
        fn prop_self_drag_is_noop(board in arb_board(), pick_index in any::<usize>()) {
            let before = board.clone();
            let mut board = board;
            let mut drag = crate::Reconciler::new();

            let task_ids: Vec<Id> = board.tasks().iter().map(|t| t.id.clone()).collect();
            if let Some(id) = pick(&task_ids, pick_index) {
                let item = DragItem::Task(id);
                drag.start(&board, &item);
                drag.over(&mut board, &item);
                drag.end(&mut board, Some(&item));
            }
            if let Some(id) = pick(&status_ids(&board), pick_index) {
                let item = DragItem::Status(id);
                drag.start(&board, &item);
                drag.over(&mut board, &item);
                drag.end(&mut board, Some(&item));
            }
            prop_assert_eq!(&board, &before);
        }

        #[test]
        fn prop_snapshot_roundtrip(board in arb_board()) {
            let json = Snapshot::of(&board).to_json().unwrap();
            prop_assert_eq!(Snapshot::from_json(&json).unwrap().into_board(), board);
        }
    }
}
