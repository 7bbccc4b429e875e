//! Locate the variant-code, title, and amount columns in a header row by
//! substring match against fixed label fragments.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Required column(s) «{}» could not be found in the header row", .labels.join("», «"))]
    MissingColumns { labels: Vec<String> },
}

/// The header fragments to look for. Matching is case-sensitive substring
/// containment; no locale folding is applied.
#[derive(Clone, Debug)]
pub struct Labels {
    pub variant_code: String,
    pub title: String,
    pub amount: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            variant_code: "کد تنوع".into(),
            title: "عنوان تنوع".into(),
            amount: "مبلغ نهایی بستانکار".into(),
        }
    }
}

/// Columns resolved to header indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Columns {
    pub variant_code: usize,
    /// Absent when no header matches; summaries then carry an empty title.
    pub title: Option<usize>,
    pub amount: usize,
}

/// Return each label's first containing header, scanning in header order so
/// that the lowest index wins when several headers contain the same fragment.
///
/// The variant-code and amount columns are mandatory; a failed lookup aborts
/// resolution with every missing label named. The title column is optional.
pub fn columns(headers: &[String], labels: &Labels) -> Result<Columns, Error> {
    let find = |fragment: &str| headers.iter().position(|header| header.contains(fragment));
    let variant_code = find(&labels.variant_code);
    let title = find(&labels.title);
    let amount = find(&labels.amount);
    match (variant_code, amount) {
        (Some(variant_code), Some(amount)) => Ok(Columns {
            variant_code,
            title,
            amount,
        }),
        (variant_code, amount) => {
            let mut missing = Vec::new();
            if variant_code.is_none() {
                missing.push(labels.variant_code.clone());
            }
            if amount.is_none() {
                missing.push(labels.amount.clone());
            }
            Err(Error::MissingColumns { labels: missing })
        }
    }
}
