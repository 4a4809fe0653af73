//! End-to-end tests for record roundtrip (serialize -> workbook -> deserialize -> verify)

use pretty_assertions::assert_eq;
use sheet_records::chrono::{NaiveDate, NaiveDateTime};
use sheet_records::prelude::*;
use sheet_records::rust_decimal::Decimal;

fn roundtrip<T: Record>(records: &[T], sheet_name: Option<&str>) -> Vec<T> {
    let mut writer = SpreadsheetWriter::new();
    writer.serialize(records, sheet_name).unwrap();
    let workbook = writer.into_workbook();

    let reader = SpreadsheetReader::new(&workbook);
    let options = match sheet_name {
        Some(name) => ReadOptions::new().sheet_name(name),
        None => ReadOptions::default(),
    };
    reader
        .deserialize::<T>(&options)
        .unwrap()
        .expect("workbook has a sheet")
        .to_vec()
        .unwrap()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, CellEnum)]
enum TestEnum {
    #[default]
    Value1,
    Value2,
    #[sheet(rename = "third")]
    Value3,
}

#[derive(Debug, Default, PartialEq, Record)]
struct StringRecord {
    value: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct NullableStringRecord {
    value: Option<String>,
}

#[derive(Debug, Default, PartialEq, Record)]
struct DateRecord {
    value: NaiveDateTime,
}

#[derive(Debug, Default, PartialEq, Record)]
struct IntRecord {
    value: i32,
}

#[derive(Debug, Default, PartialEq, Record)]
struct NullableIntRecord {
    value: Option<i32>,
}

#[derive(Debug, Default, PartialEq, Record)]
struct DecimalRecord {
    value: Decimal,
}

#[derive(Debug, Default, PartialEq, Record)]
struct NullableDecimalRecord {
    value: Option<Decimal>,
}

#[derive(Debug, Default, PartialEq, Record)]
struct BoolRecord {
    value: bool,
}

#[derive(Debug, Default, PartialEq, Record)]
struct NullableBoolRecord {
    value: Option<bool>,
}

#[derive(Debug, Default, PartialEq, Record)]
struct EnumRecord {
    value: TestEnum,
}

#[derive(Debug, Default, PartialEq, Record)]
struct NullableEnumRecord {
    value: Option<TestEnum>,
}

#[test]
fn test_roundtrip_string() {
    let records = vec![
        StringRecord {
            value: "Hello, World!".into(),
        },
        StringRecord {
            value: "Unicode: \u{1F600}".into(),
        },
    ];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_nullable_string() {
    let records = vec![
        NullableStringRecord {
            value: Some("Hello, World!".into()),
        },
        NullableStringRecord { value: None },
    ];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_date() {
    let records = vec![
        DateRecord {
            value: NaiveDate::from_ymd_opt(2021, 6, 8)
                .unwrap()
                .and_hms_milli_opt(13, 45, 30, 250)
                .unwrap(),
        },
        DateRecord {
            value: NaiveDate::from_ymd_opt(1899, 12, 29)
                .unwrap()
                .and_hms_opt(6, 0, 0)
                .unwrap(),
        },
    ];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_int() {
    let records = vec![
        IntRecord { value: 12345 },
        IntRecord { value: -7 },
        IntRecord { value: i32::MAX },
    ];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_nullable_int() {
    let records = vec![
        NullableIntRecord { value: Some(12345) },
        NullableIntRecord { value: None },
        NullableIntRecord { value: Some(0) },
    ];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_decimal() {
    let records = vec![
        DecimalRecord {
            value: Decimal::new(12345, 2),
        },
        DecimalRecord {
            value: Decimal::new(-5, 3),
        },
    ];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_nullable_decimal() {
    let records = vec![
        NullableDecimalRecord {
            value: Some(Decimal::new(12345, 2)),
        },
        NullableDecimalRecord { value: None },
    ];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_bool() {
    let records = vec![BoolRecord { value: true }, BoolRecord { value: false }];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_nullable_bool() {
    let records = vec![
        NullableBoolRecord { value: Some(true) },
        NullableBoolRecord { value: None },
        NullableBoolRecord { value: Some(false) },
    ];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_enum() {
    let records = vec![
        EnumRecord {
            value: TestEnum::Value2,
        },
        EnumRecord {
            value: TestEnum::Value3,
        },
    ];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_nullable_enum() {
    let records = vec![
        NullableEnumRecord {
            value: Some(TestEnum::Value2),
        },
        NullableEnumRecord { value: None },
    ];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_all_absent() {
    let records = vec![
        NullableStringRecord { value: None },
        NullableStringRecord { value: None },
    ];
    assert_eq!(roundtrip(&records, None), records);

    let records = vec![StringRecord {
        value: String::new(),
    }];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_roundtrip_named_sheet() {
    let records = vec![IntRecord { value: 1 }];
    assert_eq!(roundtrip(&records, Some("Numbers")), records);
}

#[test]
fn test_roundtrip_empty_list() {
    let records: Vec<IntRecord> = Vec::new();

    let mut writer = SpreadsheetWriter::new();
    writer.serialize(&records, None).unwrap();
    let workbook = writer.into_workbook();

    let reader = SpreadsheetReader::new(&workbook);
    let set = reader
        .deserialize::<IntRecord>(&ReadOptions::default())
        .unwrap()
        .unwrap();
    assert!(set.is_empty());
    assert_eq!(set.to_vec().unwrap(), records);
}

#[derive(Debug, Default, PartialEq, Record)]
struct FirstSheet {
    name: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct SecondSheet {
    count: i64,
    flag: bool,
}

#[test]
fn test_multiple_sheets() {
    let first = vec![
        FirstSheet { name: "a".into() },
        FirstSheet { name: "b".into() },
    ];
    let second = vec![SecondSheet {
        count: 42,
        flag: true,
    }];

    let mut writer = SpreadsheetWriter::new();
    writer.serialize(&first, Some("First")).unwrap();
    writer.serialize(&second, Some("Second")).unwrap();
    let workbook = writer.into_workbook();

    let reader = SpreadsheetReader::new(&workbook);
    assert_eq!(reader.sheet_names(), vec!["First", "Second"]);

    let read_first = reader
        .deserialize::<FirstSheet>(&ReadOptions::new().sheet_name("First"))
        .unwrap()
        .unwrap();
    assert!(read_first.exact_match());
    assert_eq!(read_first.to_vec().unwrap(), first);

    let read_second = reader
        .deserialize::<SecondSheet>(&ReadOptions::new().sheet_name("Second"))
        .unwrap()
        .unwrap();
    assert_eq!(read_second.to_vec().unwrap(), second);

    // Unknown name falls back to the first sheet
    let fallback = reader
        .deserialize::<FirstSheet>(&ReadOptions::new().sheet_name("Third"))
        .unwrap()
        .unwrap();
    assert!(!fallback.exact_match());
    assert_eq!(fallback.sheet_name(), "First");
    assert_eq!(fallback.to_vec().unwrap(), first);
}

#[derive(Debug, Default, PartialEq, Record)]
struct ThirtyMembers {
    m01: i32,
    m02: i32,
    m03: i32,
    m04: i32,
    m05: i32,
    m06: i32,
    m07: i32,
    m08: i32,
    m09: i32,
    m10: i32,
    m11: i32,
    m12: i32,
    m13: i32,
    m14: i32,
    m15: i32,
    m16: i32,
    m17: i32,
    m18: i32,
    m19: i32,
    m20: i32,
    m21: i32,
    m22: i32,
    m23: i32,
    m24: i32,
    m25: i32,
    m26: i32,
    m27: i32,
    m28: i32,
    m29: i32,
    m30: i32,
}

#[test]
fn test_thirty_members() {
    assert_eq!(ThirtyMembers::fields().len(), 30);

    let records = vec![ThirtyMembers {
        m03: 7,
        m28: -1,
        ..ThirtyMembers::default()
    }];
    assert_eq!(roundtrip(&records, None), records);
}

#[test]
fn test_thirty_members_sparse_columns() {
    // Only two of the thirty columns exist in the sheet
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet("ThirtyMembers");
    let sheet = workbook.worksheet_mut(sheet).unwrap();
    sheet.set_text("A1", "m05").unwrap();
    sheet.set_text("B1", "m30").unwrap();
    sheet.set_text("A2", "5").unwrap();
    sheet.set_text("B2", "30").unwrap();

    let reader = SpreadsheetReader::new(&workbook);
    let records = reader
        .deserialize::<ThirtyMembers>(&ReadOptions::default())
        .unwrap()
        .unwrap()
        .to_vec()
        .unwrap();

    assert_eq!(
        records,
        vec![ThirtyMembers {
            m05: 5,
            m30: 30,
            ..ThirtyMembers::default()
        }]
    );
}
