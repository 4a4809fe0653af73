//! Example: Write records to a CSV file and read them back

use sheet_records::chrono::NaiveDate;
use sheet_records::prelude::*;
use sheet_records::rust_decimal::Decimal;

#[derive(Debug, Default, Record)]
struct Invoice {
    #[sheet(rename = "Number")]
    number: u32,
    #[sheet(rename = "Customer")]
    customer: String,
    #[sheet(rename = "Issued")]
    issued: Option<NaiveDate>,
    #[sheet(rename = "Total")]
    total: Decimal,
    #[sheet(rename = "Paid")]
    paid: bool,
}

fn main() -> Result<()> {
    let invoices = vec![
        Invoice {
            number: 1001,
            customer: "Acme".into(),
            issued: NaiveDate::from_ymd_opt(2024, 3, 1),
            total: Decimal::new(125_050, 2),
            paid: true,
        },
        Invoice {
            number: 1002,
            customer: "Globex".into(),
            issued: None,
            total: Decimal::new(99, 0),
            paid: false,
        },
    ];

    let mut writer = SpreadsheetWriter::new();
    writer.serialize(&invoices, None)?;

    // Save the file
    let path = std::env::temp_dir().join("invoices.csv");
    writer.into_workbook().save(&path)?;
    println!("Wrote {}", path.display());

    let workbook = Workbook::open(&path)?;
    let reader = SpreadsheetReader::new(&workbook);
    if let Some(records) = reader.deserialize::<Invoice>(&ReadOptions::default())? {
        for invoice in &records {
            println!("{:?}", invoice?);
        }
    }

    Ok(())
}
