#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No row carried a non-empty variant code")]
    NoVariantRows,
}

/// One output record: everything known about a single variant code after the
/// whole sheet has been consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub variant_code: String,
    /// Sampled from the first row seen for this code and never updated;
    /// empty when the sheet has no title column.
    pub title: String,
    pub count: u64,
    pub total: u64,
    /// `total / count` rounded half-up, 0 for an empty group.
    pub average: u64,
}

#[derive(Debug)]
pub struct Outcome {
    /// One summary per distinct variant code, in first-seen order.
    pub summaries: Vec<Summary>,
    /// Rows whose variant-code cell trimmed to nothing; they belong to no
    /// group and are not counted anywhere.
    pub skipped_rows: usize,
}

pub(crate) mod function {
    use crate::normalize_amount;
    use crate::resolve::Columns;
    use crate::sheet::Cell;
    use crate::summarize::{Error, Outcome, Summary};
    use std::collections::HashMap;

    /// Group `rows` by their variant-code cell and accumulate the normalized
    /// amount per group. A row whose code trims to the empty string is
    /// skipped; a run in which every row is skipped fails.
    pub fn summarize(rows: &[Vec<Cell>], columns: &Columns) -> Result<Outcome, Error> {
        let mut groups = Vec::<Group>::new();
        let mut index = HashMap::<String, usize>::new();
        let mut skipped_rows = 0;
        for row in rows {
            let code = cell_at(row, columns.variant_code).as_text();
            let code = code.trim();
            if code.is_empty() {
                skipped_rows += 1;
                continue;
            }
            let amount = normalize_amount(cell_at(row, columns.amount));
            let slot = match index.get(code) {
                Some(slot) => *slot,
                None => {
                    let title = columns
                        .title
                        .map(|at| cell_at(row, at).as_text().trim().to_owned())
                        .unwrap_or_default();
                    groups.push(Group {
                        variant_code: code.to_owned(),
                        title,
                        count: 0,
                        total: 0,
                    });
                    index.insert(code.to_owned(), groups.len() - 1);
                    groups.len() - 1
                }
            };
            let group = &mut groups[slot];
            group.count += 1;
            group.total = group.total.saturating_add(amount);
        }
        if groups.is_empty() {
            return Err(Error::NoVariantRows);
        }
        Ok(Outcome {
            summaries: groups.into_iter().map(Group::into_summary).collect(),
            skipped_rows,
        })
    }

    struct Group {
        variant_code: String,
        title: String,
        count: u64,
        total: u64,
    }

    impl Group {
        fn into_summary(self) -> Summary {
            let average = if self.count == 0 {
                0
            } else {
                // round-half-up on the quotient; an odd count cannot tie
                self.total.saturating_add(self.count / 2) / self.count
            };
            Summary {
                variant_code: self.variant_code,
                title: self.title,
                count: self.count,
                total: self.total,
                average,
            }
        }
    }

    fn cell_at(row: &[Cell], at: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        row.get(at).unwrap_or(&EMPTY)
    }
}
