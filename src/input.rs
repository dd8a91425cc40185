use crate::ledger::operation::{Kind, Operation};

use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The CSV itself is malformed.
    #[error("malformed CSV: {0}")]
    Csv(String),

    /// The row parsed but does not describe a valid operation.
    #[error("bad record: {0}")]
    Format(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<<OperationRecord as TryInto<Operation>>::Error> for Error {
    fn from(err: <OperationRecord as TryInto<Operation>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

// A bad row does not abort the replay: it goes out on the error channel and
// the remaining rows still apply. Whoever drives the replay decides what to
// do with the rejects.
pub fn parse(
    input_stream: (impl std::io::Read + Send + 'static),
) -> (Receiver<Operation>, Receiver<Error>) {
    let (operation_tx, operation_rx): (Sender<Operation>, Receiver<Operation>) = mpsc::channel();
    let (error_tx, error_rx): (Sender<Error>, Receiver<Error>) = mpsc::channel();

    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    // Moving to a new thread so the ledger can start replaying while we are
    // still reading.
    std::thread::spawn(move || {
        for record in reader.deserialize::<OperationRecord>() {
            match convert(record) {
                Ok(operation) => operation_tx.send(operation).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
                Err(err) => error_tx.send(err).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
            };
        }
    });

    (operation_rx, error_rx)
}

// Convert from a csv deserialise result into an operation result.
fn convert(record: Result<OperationRecord, csv::Error>) -> Result<Operation, Error> {
    Ok(record?.try_into()?)
}

#[test]
// Parsing well-formed data should return a stream of Operation.
fn test_parse_ok() {
    let data = r#"op,account,to,amount
deposit,alice,,5.0
withdrawal,alice,,1.5
transfer,alice,bob,2.0
lock,bob,,1.0
unlock,bob,,"#;
    let reader = std::io::Cursor::new(data);
    let (operations, errors) = parse(reader);

    assert_eq!(5, operations.iter().count());
    assert_eq!(0, errors.iter().count());
}

#[test]
fn test_parse_ok_with_whitespace() {
    let data = r#"op,     account,     to,amount
deposit, alice, , 5.0
withdrawal , alice ,  , 1.5
transfer ,   alice   ,   bob   , 2.0
    lock ,bob,,1.0
        unlock                  ,bob,,"#;
    let reader = std::io::Cursor::new(data);
    let (operations, errors) = parse(reader);

    assert_eq!(5, operations.iter().count());
    assert_eq!(0, errors.iter().count());
}

#[test]
// Structurally broken rows should surface as Csv errors.
fn test_parse_invalid_format() {
    for (data, err_contains) in vec![
        (
            r#"op,account,to,amount
stake,alice,,1.0"#,
            "unknown variant `stake`",
        ),
        (
            r#"op,account,to,amount
deposit,alice,"#,
            "found record with 3 fields, but the previous record has 4 fields",
        ),
        (
            r#"op,account,to,amount
deposit,alice,,1.0,,,"#,
            "found record with 7 fields, but the previous record has 4 fields",
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let (operations, errors) = parse(reader);

        assert_eq!(0, operations.iter().count());

        let errs: Vec<Error> = errors.iter().collect();
        assert_eq!(1, errs.len());

        match &errs[0] {
            Error::Csv(msg) => assert!(msg.contains(err_contains), "{:?}", msg),
            _ => panic!("unexpected error"),
        }
    }
}

#[test]
// Rows that parse but miss a required field should fail to convert into an
// Operation.
fn test_parse_invalid_data() {
    for (data, want_err) in vec![
        (
            r#"op,account,to,amount
deposit,alice,,"#,
            Error::Format("missing amount for deposit".to_string()),
        ),
        (
            r#"op,account,to,amount
withdrawal,alice,,"#,
            Error::Format("missing amount for withdrawal".to_string()),
        ),
        (
            r#"op,account,to,amount
transfer,alice,bob,"#,
            Error::Format("missing amount for transfer".to_string()),
        ),
        (
            r#"op,account,to,amount
transfer,alice,,1.0"#,
            Error::Format("missing recipient for transfer".to_string()),
        ),
        (
            r#"op,account,to,amount
lock,alice,,"#,
            Error::Format("missing amount for lock".to_string()),
        ),
        (
            r#"op,account,to,amount
deposit,,,1.0"#,
            Error::Format("missing account identifier".to_string()),
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let (operations, errors) = parse(reader);

        assert_eq!(0, operations.iter().count());

        let errs: Vec<Error> = errors.iter().collect();
        assert_eq!(vec![want_err], errs);
    }
}

// OperationRecord exists because serde cannot deserialise CSV rows straight
// into Operation (see https://github.com/BurntSushi/rust-csv/issues/211).
// Keeping the wire shape separate also means Operation makes no assumption
// about how rows are formatted, so the domain side stays clean.
#[derive(Debug, Deserialize)]
pub struct OperationRecord {
    op: OperationRecordKind,
    account: String,
    to: Option<String>,
    amount: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationRecordKind {
    Deposit,
    Withdrawal,
    Transfer,
    Lock,
    Unlock,
}

impl TryFrom<OperationRecord> for Operation {
    type Error = &'static str;
    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        if record.account.is_empty() {
            return Err("missing account identifier");
        }

        let kind = match record.op {
            OperationRecordKind::Deposit => Kind::Deposit(match record.amount {
                Some(amount) => amount,
                None => return Err("missing amount for deposit"),
            }),
            OperationRecordKind::Withdrawal => Kind::Withdrawal(match record.amount {
                Some(amount) => amount,
                None => return Err("missing amount for withdrawal"),
            }),
            OperationRecordKind::Transfer => {
                let to = match record.to {
                    Some(to) => to,
                    None => return Err("missing recipient for transfer"),
                };

                Kind::Transfer(
                    to,
                    match record.amount {
                        Some(amount) => amount,
                        None => return Err("missing amount for transfer"),
                    },
                )
            }
            OperationRecordKind::Lock => Kind::Lock(match record.amount {
                Some(amount) => amount,
                None => return Err("missing amount for lock"),
            }),
            OperationRecordKind::Unlock => Kind::Unlock,
        };

        Ok(Self::new(kind, record.account))
    }
}

#[test]
// When the records are well formed, they should convert into Operation.
// A stray recipient on anything but a transfer is ignored rather than
// rejected.
fn test_operation_record_into_operation_well_formed() {
    let test_cases: Vec<(OperationRecord, Operation)> = vec![
        (
            OperationRecord {
                op: OperationRecordKind::Deposit,
                account: "alice".to_string(),
                to: None,
                amount: Some(Decimal::new(12, 1)),
            },
            Operation::new(Kind::Deposit(Decimal::new(12, 1)), "alice".to_string()),
        ),
        (
            OperationRecord {
                op: OperationRecordKind::Withdrawal,
                account: "bob".to_string(),
                to: Some("carol".to_string()),
                amount: Some(Decimal::new(21, 1)),
            },
            Operation::new(Kind::Withdrawal(Decimal::new(21, 1)), "bob".to_string()),
        ),
        (
            OperationRecord {
                op: OperationRecordKind::Transfer,
                account: "alice".to_string(),
                to: Some("bob".to_string()),
                amount: Some(Decimal::new(5, 1)),
            },
            Operation::new(
                Kind::Transfer("bob".to_string(), Decimal::new(5, 1)),
                "alice".to_string(),
            ),
        ),
        (
            OperationRecord {
                op: OperationRecordKind::Lock,
                account: "carol".to_string(),
                to: None,
                amount: Some(Decimal::new(100, 2)),
            },
            Operation::new(Kind::Lock(Decimal::new(100, 2)), "carol".to_string()),
        ),
        (
            OperationRecord {
                op: OperationRecordKind::Unlock,
                account: "carol".to_string(),
                to: None,
                amount: None,
            },
            Operation::new(Kind::Unlock, "carol".to_string()),
        ),
    ];

    for (record, operation) in test_cases {
        assert_eq!(operation, record.try_into().unwrap());
    }
}

#[test]
// When the records are malformed, they should return an Err.
fn test_operation_record_into_operation_invalid_data() {
    let record = OperationRecord {
        op: OperationRecordKind::Withdrawal,
        account: "alice".to_string(),
        to: None,
        amount: None,
    };

    let got = Operation::try_from(record);
    assert_eq!(Err("missing amount for withdrawal"), got);
}
