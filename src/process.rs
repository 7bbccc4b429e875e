use crate::resolve::Labels;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Xlsx(#[from] crate::xlsx::Error),
    #[error(transparent)]
    Resolve(#[from] crate::resolve::Error),
    #[error(transparent)]
    Summarize(#[from] crate::summarize::Error),
}

/// Knobs of the pipeline, defaulting to the labels and names the seller
/// export uses.
#[derive(Clone, Debug)]
pub struct Options {
    pub labels: Labels,
    /// The name of the sheet inside the output workbook.
    pub output_sheet: String,
    /// The file name the caller should save the output workbook under.
    pub output_file: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            labels: Labels::default(),
            output_sheet: "خلاصه بر اساس کد تنوع".into(),
            output_file: "summary_by_variant.xlsx".into(),
        }
    }
}

pub struct Outcome {
    /// The finished summary workbook.
    pub bytes: Vec<u8>,
    /// Echo of [`Options::output_file`].
    pub file_name: String,
    pub groups: usize,
    pub skipped_rows: usize,
}

pub(crate) mod function {
    use crate::process::{Error, Options, Outcome};
    use crate::sheet::Cell;
    use crate::{resolve, summarize, xlsx};

    const SUMMARY_HEADERS: [&str; 5] = [
        "کد تنوع",
        "عنوان تنوع (نمونه)",
        "تعداد ردیف",
        "جمع مبلغ نهایی بستانکار (ریال)",
        "میانگین مبلغ نهایی بستانکار (ریال)",
    ];

    /// Run the whole pipeline over the bytes of an input workbook: decode the
    /// first sheet, resolve the columns, aggregate by variant code, and encode
    /// the summary workbook.
    pub fn process(
        input: &[u8],
        Options {
            labels,
            output_sheet,
            output_file,
        }: Options,
    ) -> Result<Outcome, Error> {
        let sheet = xlsx::read_first_sheet(input)?;
        tracing::info!(
            sheet = %sheet.name,
            rows = sheet.rows.len(),
            "decoded first sheet"
        );
        let columns = resolve::columns(&sheet.headers, &labels)?;
        tracing::debug!(?columns, "resolved columns");
        let summarize::Outcome {
            summaries,
            skipped_rows,
        } = summarize(&sheet.rows, &columns)?;
        tracing::info!(
            groups = summaries.len(),
            skipped_rows,
            "aggregated variant groups"
        );
        let groups = summaries.len();
        let rows: Vec<Vec<Cell>> = summaries
            .into_iter()
            .map(|summary| {
                vec![
                    Cell::Text(summary.variant_code),
                    Cell::Text(summary.title),
                    Cell::Number(summary.count as f64),
                    Cell::Number(summary.total as f64),
                    Cell::Number(summary.average as f64),
                ]
            })
            .collect();
        let bytes = xlsx::write_table(&output_sheet, &SUMMARY_HEADERS, &rows)?;
        Ok(Outcome {
            bytes,
            file_name: output_file,
            groups,
            skipped_rows,
        })
    }
}
