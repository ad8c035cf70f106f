use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A decoded bank statement.
///
/// Transactions keep the order of their `:61:` lines in the source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// `:20:` Transaction reference number.
    pub transaction_reference: Option<String>,
    /// `:25:` Account identification (usually an IBAN or NRB number).
    pub account_id: Option<String>,
    /// `:28C:` Statement number / sequence, kept verbatim (e.g. "00042/001").
    pub statement_number: Option<String>,
    /// `:60F:` Opening balance. `None` when missing or malformed.
    pub opening_balance: Option<OpeningBalance>,
    /// One entry per recognized `:61:` line.
    pub transactions: Vec<Transaction>,
}

/// `:60F:` Opening balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningBalance {
    pub debit_credit: DebitCredit,
    pub date: NaiveDate,
    /// Three-letter currency code as it appears in the file (e.g. "PLN").
    pub currency: String,
    /// Always non-negative; the sign is carried by `debit_credit`.
    pub amount: Decimal,
}

/// A single statement entry: one `:61:` line plus its `:86:` narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub value_date: NaiveDate,
    /// Booking date. The file carries only month and day; the year is
    /// inferred from `value_date`.
    pub entry_date: Option<NaiveDate>,
    pub debit_credit: DebitCredit,
    /// Always non-negative; the sign is carried by `debit_credit`.
    pub amount: Decimal,
    /// One-letter transaction type following the amount (see [`EntryType`]).
    pub type_code: Option<char>,
    /// Remainder of the `:61:` line after the type code, trimmed.
    pub reference: String,
    /// Raw `:86:` block, kept for troubleshooting.
    pub raw_narrative: Option<String>,
    /// Leading payload of the `:86:` line (e.g. "073").
    pub info_code: Option<String>,
    /// `~20`
    pub description: Option<String>,
    /// `~21`, masked (e.g. "4246xx1115").
    pub card_number: Option<String>,
    /// `~30`
    pub bank_code: Option<String>,
    /// `~31`
    pub bank_reference: Option<String>,
    /// `~32`
    pub counterparty_name: Option<String>,
    /// `~33`
    pub counterparty_city: Option<String>,
    /// `~38` IBAN or account number.
    pub counterparty_account: Option<String>,
    /// `~62` plus the address continuation codes `~60`, `~61`, `~63`-`~65`.
    pub counterparty_full_address: Option<String>,
    /// `~34` and every subfield without a dedicated attribute.
    pub additional_info: Option<String>,
}

impl Transaction {
    /// Create a transaction with header fields only and no narrative.
    pub fn new(
        value_date: NaiveDate,
        debit_credit: DebitCredit,
        amount: Decimal,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            value_date,
            entry_date: None,
            debit_credit,
            amount,
            type_code: None,
            reference: reference.into(),
            raw_narrative: None,
            info_code: None,
            description: None,
            card_number: None,
            bank_code: None,
            bank_reference: None,
            counterparty_name: None,
            counterparty_city: None,
            counterparty_account: None,
            counterparty_full_address: None,
            additional_info: None,
        }
    }

    /// Classification of [`type_code`](Self::type_code), if one was present.
    pub fn entry_type(&self) -> Option<EntryType> {
        self.type_code.map(EntryType::from_code)
    }

    /// Amount with the debit/credit mark applied: debits are negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.debit_credit {
            DebitCredit::Debit => -self.amount,
            DebitCredit::Credit => self.amount,
        }
    }
}

/// Debit/credit mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebitCredit {
    /// `D`: money leaving the account.
    Debit,
    /// `C`: money entering the account.
    Credit,
}

impl DebitCredit {
    /// Parse the single-letter mark. Only upper-case `D` and `C` are accepted.
    pub fn from_mark(mark: char) -> Option<Self> {
        match mark {
            'D' => Some(Self::Debit),
            'C' => Some(Self::Credit),
            _ => None,
        }
    }

    /// The single-letter mark used in the file.
    pub fn mark(&self) -> char {
        match self {
            Self::Debit => 'D',
            Self::Credit => 'C',
        }
    }
}

/// MT940 transaction entry type, derived from the letter after the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EntryType {
    /// `S`: regular statement entry (most common).
    Standard,
    /// `F`: final or closing entry.
    Final,
    /// `R`: reversal or cancellation.
    Reversal,
    /// `C`: manual credit adjustment.
    CreditAdjustment,
    /// `D`: manual debit adjustment.
    DebitAdjustment,
    /// `P`: provisional entry.
    Provisional,
    /// `E`: foreign exchange entry.
    ExchangeRate,
    /// `I`: informational entry with no monetary effect.
    Information,
    /// Any other letter.
    Unknown,
}

impl EntryType {
    pub fn from_code(code: char) -> Self {
        match code {
            'S' => Self::Standard,
            'F' => Self::Final,
            'R' => Self::Reversal,
            'C' => Self::CreditAdjustment,
            'D' => Self::DebitAdjustment,
            'P' => Self::Provisional,
            'E' => Self::ExchangeRate,
            'I' => Self::Information,
            _ => Self::Unknown,
        }
    }
}
