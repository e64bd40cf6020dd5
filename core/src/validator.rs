use crate::*;

/// Checks a selection given as the text of the picked faces, in the order they were picked.
///
/// The selection must read `operand operator operand`; anything else, including a division that is not exact, is
/// simply a wrong answer.
pub fn is_correct_answer<S: AsRef<str>>(selected: &[S], target: i32) -> bool {
    let [lhs, op, rhs] = selected else {
        return false;
    };
    let (Ok(lhs), Ok(op), Ok(rhs)) = (
        lhs.as_ref().parse::<i32>(),
        op.as_ref().parse::<Operator>(),
        rhs.as_ref().parse::<i32>(),
    ) else {
        return false;
    };
    op.apply(lhs, rhs) == Some(target)
}

/// Value of a `number operator number` selection of faces.
pub fn evaluate_faces(faces: &[Face]) -> Option<i32> {
    let &[Face::Number(lhs), Face::Operator(op), Face::Number(rhs)] = faces else {
        return None;
    };
    op.apply(lhs.into(), rhs.into())
}

pub fn is_correct_selection(faces: &[Face], target: i32) -> bool {
    evaluate_faces(faces) == Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_operand_operator_operand() {
        assert!(is_correct_answer(&["6", "+", "3"], 9));
        assert!(is_correct_answer(&["3", "+", "6"], 9));
        assert!(is_correct_answer(&["12", "÷", "4"], 3));
        assert!(is_correct_answer(&["2", "-", "9"], -7));
    }

    #[test]
    fn rejects_wrong_slot_order() {
        assert!(!is_correct_answer(&["+", "6", "3"], 9));
        assert!(!is_correct_answer(&["6", "3", "+"], 9));
    }

    #[test]
    fn rejects_undefined_division() {
        for target in [-1, 0, 1, 3, 4] {
            assert!(!is_correct_answer(&["6", "÷", "0"], target));
            assert!(!is_correct_answer(&["7", "÷", "2"], target));
        }
    }

    #[test]
    fn rejects_wrong_result_and_malformed_input() {
        assert!(!is_correct_answer(&["6", "+", "3"], 10));
        assert!(!is_correct_answer(&["6", "+"], 6));
        assert!(!is_correct_answer(&["6", "+", "3", "+"], 9));
        assert!(!is_correct_answer(&["A", "+", "3"], 3));
        assert!(!is_correct_answer(&["6", "x", "3"], 18));
        assert!(!is_correct_answer(&["2147483647", "+", "1"], i32::MIN));
    }

    #[test]
    fn operands_are_any_integer_not_just_card_numbers() {
        assert!(is_correct_answer(&["20", "+", "1"], 21));
        assert!(is_correct_answer(&["-3", "*", "4"], -12));
        assert!(is_correct_answer(&["0", "÷", "5"], 0));
    }

    #[test]
    fn faces_evaluate_like_their_text() {
        let faces = [
            Face::Number(8),
            Face::Operator(Operator::Mul),
            Face::Number(3),
        ];
        assert_eq!(evaluate_faces(&faces), Some(24));
        assert!(is_correct_selection(&faces, 24));

        let faces = [
            Face::Operator(Operator::Mul),
            Face::Number(8),
            Face::Number(3),
        ];
        assert_eq!(evaluate_faces(&faces), None);
    }
}
