//! Closed symbol tables mapping the deck file's integer codes to canonical names.
//!
//! The deck format stores every enumerated value as a bare integer. Each table
//! here is a fixed Rust enum with a checked code-to-variant mapping, so an
//! out-of-range code is rejected at the parsing boundary instead of silently
//! indexing past a table.

use std::fmt;
use thiserror::Error;

/// Raised when an integer code falls outside its symbol table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("code {code} is out of range for {table} (valid codes are 0..{len})")]
pub struct SymbolError {
    pub table: &'static str,
    pub code: i64,
    pub len: usize,
}

/// Common surface of the four deck symbol tables.
pub trait Symbol: Sized + Copy {
    /// Table name used in diagnostics.
    const TABLE: &'static str;
    /// Canonical names in code order.
    const NAMES: &'static [&'static str];

    /// Resolve an integer code, rejecting anything outside the table.
    fn from_code(code: i64) -> Result<Self, SymbolError>;

    /// The integer code of this variant.
    fn code(self) -> usize;

    /// The canonical name of this variant.
    fn name(self) -> &'static str {
        Self::NAMES[self.code()]
    }

    /// Composite `"[code] NAME"` label used in exports and reports.
    fn label(self) -> String {
        format!("[{}] {}", self.code(), self.name())
    }
}

macro_rules! symbol_table {
    ($(#[$doc:meta])* $name:ident { $($variant:ident = $label:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(u8)]
        pub enum $name {
            $($variant),+
        }

        impl Symbol for $name {
            const TABLE: &'static str = stringify!($name);
            const NAMES: &'static [&'static str] = &[$($label),+];

            fn from_code(code: i64) -> Result<Self, SymbolError> {
                const VARIANTS: &[$name] = &[$($name::$variant),+];
                usize::try_from(code)
                    .ok()
                    .and_then(|idx| VARIANTS.get(idx).copied())
                    .ok_or(SymbolError {
                        table: Self::TABLE,
                        code,
                        len: Self::NAMES.len(),
                    })
            }

            fn code(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[{}] {}", self.code(), self.name())
            }
        }
    };
}

symbol_table!(
    /// Card categories. `All` is the wildcard used by effect targets.
    CardType {
        All = "ALL",
        Studente = "STUDENTE",
        Matricola = "MATRICOLA",
        StudenteSemplice = "STUDENTE_SEMPLICE",
        Laureando = "LAUREANDO",
        Bonus = "BONUS",
        Malus = "MALUS",
        Magia = "MAGIA",
        Istantanea = "ISTANTANEA",
    }
);

symbol_table!(
    /// Actions an effect can perform.
    Action {
        Gioca = "GIOCA",
        Scarta = "SCARTA",
        Elimina = "ELIMINA",
        Ruba = "RUBA",
        Pesca = "PESCA",
        Prendi = "PRENDI",
        Blocca = "BLOCCA",
        Scambia = "SCAMBIA",
        Mostra = "MOSTRA",
        Impedire = "IMPEDIRE",
        Ingegnere = "INGEGNERE",
    }
);

symbol_table!(
    /// Which players an effect applies to.
    PlayerTarget {
        Io = "IO",
        Tu = "TU",
        Voi = "VOI",
        Tutti = "TUTTI",
    }
);

symbol_table!(
    /// When a card's effects may be played.
    WhenToPlay {
        Subito = "SUBITO",
        Inizio = "INIZIO",
        Fine = "FINE",
        Mai = "MAI",
        Sempre = "SEMPRE",
    }
);
