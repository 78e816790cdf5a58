//! Rectangular matrix of [`Value`]s and the arithmetic behind each row operation.
//!
//! A matrix is validated once at construction and its dimensions never change
//! afterwards. [`Matrix::apply`] never mutates `self`: it validates the command
//! against the current shape and contents, then returns the next matrix, so a
//! failed command cannot leave a half-updated row behind.

use super::command::{Command, RowRef};
use super::error::{Result, RowOpError};
use super::value::Value;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<Value>>,
    cols: usize,
}

impl Matrix {
    /// Build a matrix from rows of values, enforcing the column-count invariant.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Result<Matrix> {
        let Some(first) = rows.first() else {
            return Err(RowOpError::EmptyMatrix);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(RowOpError::EmptyMatrix);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(RowOpError::RaggedMatrix {
                    row: i + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
        }
        Ok(Matrix { rows, cols })
    }

    /// Build a matrix from raw text tokens, one inner sequence per row.
    ///
    /// Every token must be numeric (`MalformedRow` otherwise) and every row
    /// must have the same length (`RaggedMatrix` otherwise).
    pub fn from_tokens<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Matrix> {
        let mut parsed = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let values = row
                .iter()
                .map(|token| {
                    let token = token.as_ref();
                    Value::from_token(token).ok_or_else(|| RowOpError::MalformedRow {
                        row: i + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            parsed.push(values);
        }
        Matrix::from_rows(parsed)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Value> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Cell display strings, row by row.
    pub fn to_display_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Value::to_string).collect())
            .collect()
    }

    /// Compute the matrix that results from applying `command`.
    pub fn apply(&self, command: &Command) -> Result<Matrix> {
        let row_count = self.row_count();
        for row in command.rows() {
            row.index(row_count)?;
        }

        let mut next = self.clone();
        match *command {
            Command::Swap { first, second } => {
                next.rows.swap(first.index(row_count)?, second.index(row_count)?);
            }
            Command::ScalarMultiply { row, scalar } => {
                let r = row.index(row_count)?;
                let cells: Vec<f64> = self
                    .numeric_row(row)?
                    .into_iter()
                    .map(|cell| cell * scalar)
                    .collect();
                next.rows[r] = finite_cells(cells, command)?;
            }
            Command::ScalarDivide { row, divisor } => {
                if divisor == 0.0 {
                    return Err(RowOpError::DivisionByZero(command.to_string()));
                }
                let r = row.index(row_count)?;
                let cells = self.numeric_row(row)?;
                if cells.iter().any(|cell| !(cell / divisor).is_finite()) {
                    return Err(RowOpError::NumericOverflow(command.to_string()));
                }
                next.rows[r] = cells
                    .into_iter()
                    .map(|cell| Value::divide(cell, divisor))
                    .collect();
            }
            Command::RowCombine {
                target,
                source_a,
                operator,
                scalar,
                source_b,
            } => {
                // Sources are read from `self`, so a target that aliases a
                // source still sees the pre-operation values.
                let a = self.numeric_row(source_a)?;
                let b = self.numeric_row(source_b)?;
                let t = target.index(row_count)?;
                let cells: Vec<f64> = a
                    .iter()
                    .zip(&b)
                    .map(|(x, y)| operator.apply(*x, scalar * y))
                    .collect();
                next.rows[t] = finite_cells(cells, command)?;
            }
        }
        Ok(next)
    }

    /// Read a row as plain numbers, refusing fraction cells.
    fn numeric_row(&self, row: RowRef) -> Result<Vec<f64>> {
        let index = row.index(self.row_count())?;
        self.rows[index]
            .iter()
            .enumerate()
            .map(|(col, value)| {
                value.as_number().ok_or_else(|| RowOpError::FractionOperand {
                    row: row.0,
                    column: col + 1,
                    value: value.to_string(),
                })
            })
            .collect()
    }
}

/// Wrap computed cells, refusing any that overflowed to infinity or NaN.
fn finite_cells(cells: Vec<f64>, command: &Command) -> Result<Vec<Value>> {
    if cells.iter().all(|cell| cell.is_finite()) {
        Ok(cells.into_iter().map(Value::Number).collect())
    } else {
        Err(RowOpError::NumericOverflow(command.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ErrorKind, parse_command};

    fn matrix(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(
            rows.iter()
                .map(|r| r.iter().copied().map(Value::Number).collect())
                .collect(),
        )
        .unwrap()
    }

    fn apply(m: &Matrix, text: &str) -> Result<Matrix> {
        m.apply(&parse_command(text)?)
    }

    #[test]
    fn test_from_tokens_validates_numbers_and_shape() {
        let m = Matrix::from_tokens(&[vec!["1", "2"], vec!["3", "4"]]).unwrap();
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.col_count(), 2);
        assert_eq!(m.get(1, 0), Some(Value::Number(3.0)));

        let err = Matrix::from_tokens(&[vec!["1", "x"]]).unwrap_err();
        assert_eq!(
            err,
            RowOpError::MalformedRow {
                row: 1,
                token: "x".to_string()
            }
        );

        let err = Matrix::from_tokens(&[vec!["1", "2"], vec!["3"]]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RaggedMatrix);

        let empty: [Vec<&str>; 0] = [];
        assert_eq!(
            Matrix::from_tokens(&empty).unwrap_err().kind(),
            ErrorKind::EmptyMatrix
        );
    }

    #[test]
    fn test_swap_exchanges_rows_and_is_self_inverse() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let swapped = apply(&m, "R1 <> R2").unwrap();
        assert_eq!(swapped, matrix(&[&[3.0, 4.0], &[1.0, 2.0]]));
        assert_eq!(apply(&swapped, "R1 <> R2").unwrap(), m);
    }

    #[test]
    fn test_scalar_multiply_negative() {
        let m = matrix(&[&[3.0, 4.0], &[1.0, 2.0]]);
        let next = apply(&m, "R1 = R1 * -2").unwrap();
        assert_eq!(next, matrix(&[&[-6.0, -8.0], &[1.0, 2.0]]));
    }

    #[test]
    fn test_scalar_divide_exact() {
        let m = matrix(&[&[6.0, 9.0]]);
        let next = apply(&m, "R1 = R1 / 3").unwrap();
        assert_eq!(next, matrix(&[&[2.0, 3.0]]));
        assert!(next.rows()[0].iter().all(|v| !v.is_fraction()));
    }

    #[test]
    fn test_scalar_divide_inexact_falls_back_to_fraction() {
        let m = matrix(&[&[7.0, 9.0]]);
        let next = apply(&m, "R1 = R1 / 3").unwrap();
        assert_eq!(next.to_display_rows(), vec![vec!["7/3", "3"]]);
        assert!(next.get(0, 0).unwrap().is_fraction());
        assert!(!next.get(0, 1).unwrap().is_fraction());
    }

    #[test]
    fn test_row_combine_reads_pre_update_values() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let next = apply(&m, "R1 = R1 + R2").unwrap();
        assert_eq!(next, matrix(&[&[4.0, 6.0], &[3.0, 4.0]]));

        let next = apply(&m, "R2 = R2 - 3R1").unwrap();
        assert_eq!(next, matrix(&[&[1.0, 2.0], &[0.0, -2.0]]));

        // Target aliases the scaled source.
        let next = apply(&m, "R1 = R2 - 2R1").unwrap();
        assert_eq!(next, matrix(&[&[1.0, 0.0], &[3.0, 4.0]]));
    }

    #[test]
    fn test_out_of_range_rows_rejected() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        for text in ["R5 <> R1", "R3 = R3 * 2", "R1 = R1 + 4R9", "R0 <> R1"] {
            let err = apply(&m, text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::RowOutOfRange, "{text}");
        }
    }

    #[test]
    fn test_fraction_cells_are_not_operands() {
        let m = matrix(&[&[7.0, 9.0], &[1.0, 1.0]]);
        let with_fraction = apply(&m, "R1 = R1 / 3").unwrap();

        let err = apply(&with_fraction, "R1 = R1 * 3").unwrap_err();
        assert_eq!(
            err,
            RowOpError::FractionOperand {
                row: 1,
                column: 1,
                value: "7/3".to_string()
            }
        );
        let err = apply(&with_fraction, "R2 = R2 + R1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FractionOperand);

        // Swapping moves fraction cells without reading them.
        let swapped = apply(&with_fraction, "R1 <> R2").unwrap();
        assert_eq!(swapped.to_display_rows()[1], vec!["7/3", "3"]);
        // Overwriting a fraction row from numeric sources is fine.
        let next = apply(&with_fraction, "R1 = R2 + R2").unwrap();
        assert_eq!(next.to_display_rows()[0], vec!["2", "2"]);
    }

    #[test]
    fn test_overflow_is_rejected_without_change() {
        let m = matrix(&[&[1e308, 3.0], &[1.0, 1.0]]);
        for text in ["R1 = R1 * 10", "R1 = R1 + 9R1", "R1 = R1 / 0.001"] {
            let err = apply(&m, text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NumericOverflow, "{text}");
            assert!(err.to_string().contains(text), "{text}");
        }

        // Large but finite results are still fine.
        let next = apply(&m, "R1 = R1 / 3").unwrap();
        assert!(!next.to_display_rows()[0][0].starts_with('#'));
        assert_eq!(next.to_display_rows()[0][1], "1");
    }

    #[test]
    fn test_apply_leaves_source_matrix_untouched() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let before = m.clone();
        let _ = apply(&m, "R1 = R1 * 10").unwrap();
        assert!(apply(&m, "R1 = R1 * 10 + 1").is_err());
        assert_eq!(m, before);
    }
}
