//! rowreduce_engine - Matrix values, row-operation grammar and arithmetic.

pub mod engine;

#[cfg(test)]
mod tests {
    use crate::engine::*;

    fn m(rows: &[&[&str]]) -> Matrix {
        let rows: Vec<Vec<&str>> = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::from_tokens(&rows).unwrap()
    }

    #[test]
    fn test_worked_elimination() {
        // Reduce [[2, 4, 6], [1, 3, 5]] to echelon form by hand.
        let mut matrix = m(&[&["2", "4", "6"], &["1", "3", "5"]]);
        for op in ["R1 <> R2", "R2 = R2 - 2R1", "R2 = R2 / -2", "R1 = R1 - 3R2"] {
            matrix = matrix.apply(&parse_command(op).unwrap()).unwrap();
        }
        assert_eq!(
            matrix.to_display_rows(),
            vec![vec!["1", "0", "-1"], vec!["0", "1", "2"]]
        );
    }

    #[test]
    fn test_decimal_scalars() {
        let matrix = m(&[&["2", "-4"]]);
        let next = matrix.apply(&parse_command("R1 = R1 * 0.5").unwrap()).unwrap();
        assert_eq!(next.to_display_rows(), vec![vec!["1", "-2"]]);

        let next = matrix.apply(&parse_command("R1 = R1 / 1.5").unwrap()).unwrap();
        assert_eq!(next.to_display_rows(), vec![vec!["2/1.5", "-4/1.5"]]);
    }
}
