#[cfg(test)]
pub mod cards_tests {
    use copydesk::cards::{apply_card_op, CardOp};

    #[test]
    fn test_card_op_from_str_success() {
        assert_eq!("add".parse(), Ok(CardOp::Add));
        assert_eq!("remove".parse(), Ok(CardOp::Remove));
        assert_eq!("move-up".parse(), Ok(CardOp::MoveUp));
        assert_eq!("move-down".parse(), Ok(CardOp::MoveDown));
    }

    #[test]
    fn test_card_op_from_str_fails_on_unknown() {
        assert!("shuffle".parse::<CardOp>().is_err());
        assert!("ADD".parse::<CardOp>().is_err());
    }

    #[test]
    fn test_card_op_display_round_trip_success() {
        for op in [
            CardOp::Add,
            CardOp::Remove,
            CardOp::MoveUp,
            CardOp::MoveDown,
        ] {
            assert_eq!(op.to_string().parse(), Ok(op));
        }
    }

    #[test]
    fn test_apply_card_op_add_appends_default_row() {
        let mut rows = vec!["a".to_string()];
        apply_card_op(&mut rows, CardOp::Add, 0, 0);
        assert_eq!(rows, vec!["a".to_string(), String::new()]);
    }

    #[test]
    fn test_apply_card_op_remove_success() {
        let mut rows = vec![1, 2, 3];
        apply_card_op(&mut rows, CardOp::Remove, 1, 0);
        assert_eq!(rows, vec![1, 3]);
    }

    #[test]
    fn test_apply_card_op_remove_fails_on_min_len_floor() {
        let mut rows = vec![1];
        apply_card_op(&mut rows, CardOp::Remove, 0, 1);
        assert_eq!(rows, vec![1]);
    }

    #[test]
    fn test_apply_card_op_remove_fails_on_out_of_range_index() {
        let mut rows = vec![1, 2];
        apply_card_op(&mut rows, CardOp::Remove, 5, 0);
        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn test_apply_card_op_move_up_success() {
        let mut rows = vec![1, 2, 3];
        apply_card_op(&mut rows, CardOp::MoveUp, 2, 0);
        assert_eq!(rows, vec![1, 3, 2]);
    }

    #[test]
    fn test_apply_card_op_move_up_fails_on_first_row() {
        let mut rows = vec![1, 2];
        apply_card_op(&mut rows, CardOp::MoveUp, 0, 0);
        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn test_apply_card_op_move_down_success() {
        let mut rows = vec![1, 2, 3];
        apply_card_op(&mut rows, CardOp::MoveDown, 0, 0);
        assert_eq!(rows, vec![2, 1, 3]);
    }

    #[test]
    fn test_apply_card_op_move_down_fails_on_last_row() {
        let mut rows = vec![1, 2];
        apply_card_op(&mut rows, CardOp::MoveDown, 1, 0);
        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn test_apply_card_op_move_up_fails_on_out_of_range_index() {
        let mut rows = vec![1, 2];
        apply_card_op(&mut rows, CardOp::MoveUp, 9, 0);
        assert_eq!(rows, vec![1, 2]);
    }
}
