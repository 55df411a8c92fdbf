//! Module identifiers and the enable bitmap
//!
//! Every logging subsystem owns one bit. The same type doubles as the enable
//! bitmap: a call is emitted only when `enable_map & module` is non-zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

/// A module bit, a set of module bits, or an enable bitmap.
///
/// # Example
///
/// ```
/// use rust_module_logger::ModuleId;
///
/// const CACHE_ID: ModuleId = ModuleId::bit(4);
///
/// let enabled = ModuleId::MEM_POOL | CACHE_ID;
/// assert!(enabled.intersects(CACHE_ID));
/// assert!(!enabled.intersects(ModuleId::SOCK_LIB));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ModuleIdRepr", into = "u64")]
pub struct ModuleId(u64);

impl ModuleId {
    pub const NONE: ModuleId = ModuleId(0);
    pub const MEM_POOL: ModuleId = ModuleId(1 << 0);
    pub const MSG_POOL: ModuleId = ModuleId(1 << 1);
    pub const SOCK_LIB: ModuleId = ModuleId(1 << 2);
    pub const PMON: ModuleId = ModuleId(1 << 3);
    pub const WILDCARD: ModuleId = ModuleId(u64::MAX);

    const NAMED: [(&'static str, ModuleId); 4] = [
        ("mem_pool", ModuleId::MEM_POOL),
        ("msg_pool", ModuleId::MSG_POOL),
        ("sock_lib", ModuleId::SOCK_LIB),
        ("pmon", ModuleId::PMON),
    ];

    /// Identifier owning bit `n`.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in const context) if `n >= 64`.
    pub const fn bit(n: u32) -> ModuleId {
        assert!(n < 64, "module bit out of range");
        ModuleId(1 << n)
    }

    pub const fn from_bits(bits: u64) -> ModuleId {
        ModuleId(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// True when at least one bit is shared; this is the emission test.
    pub const fn intersects(self, other: ModuleId) -> bool {
        self.0 & other.0 != 0
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: ModuleId) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: ModuleId) -> ModuleId {
        ModuleId(self.0 | other.0)
    }

    pub const fn difference(self, other: ModuleId) -> ModuleId {
        ModuleId(self.0 & !other.0)
    }

    /// Name of a predefined identifier, if this is exactly one of them.
    pub fn name(self) -> Option<&'static str> {
        match self {
            ModuleId::NONE => Some("none"),
            ModuleId::WILDCARD => Some("all"),
            other => Self::NAMED
                .iter()
                .find(|(_, id)| *id == other)
                .map(|(name, _)| *name),
        }
    }

    fn parse_token(token: &str) -> Result<ModuleId, String> {
        let lower = token.to_ascii_lowercase();
        let lower = lower.trim_end_matches("_id");

        match lower {
            "all" | "*" | "wild_card" | "wildcard" => return Ok(ModuleId::WILDCARD),
            "none" | "null_mod" | "null" => return Ok(ModuleId::NONE),
            _ => {}
        }

        if let Some((_, id)) = Self::NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(*id);
        }

        let parsed = if let Some(hex) = lower.strip_prefix("0x") {
            u64::from_str_radix(hex, 16)
        } else {
            lower.parse::<u64>()
        };
        parsed
            .map(ModuleId)
            .map_err(|_| format!("Invalid module id: '{}'", token))
    }
}

impl BitOr for ModuleId {
    type Output = ModuleId;

    fn bitor(self, rhs: ModuleId) -> ModuleId {
        self.union(rhs)
    }
}

impl BitOrAssign for ModuleId {
    fn bitor_assign(&mut self, rhs: ModuleId) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ModuleId {
    type Output = ModuleId;

    fn bitand(self, rhs: ModuleId) -> ModuleId {
        ModuleId(self.0 & rhs.0)
    }
}

impl Not for ModuleId {
    type Output = ModuleId;

    fn not(self) -> ModuleId {
        ModuleId(!self.0)
    }
}

impl From<u64> for ModuleId {
    fn from(bits: u64) -> Self {
        ModuleId(bits)
    }
}

impl From<ModuleId> for u64 {
    fn from(id: ModuleId) -> u64 {
        id.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#x}", self.0),
        }
    }
}

/// Parses a `,` or `|` separated list of module names or numbers.
///
/// Accepted tokens: `mem_pool`, `msg_pool`, `sock_lib`, `pmon` (an `_id`
/// suffix is tolerated), `all`/`*`, `none`, hex (`0x1f`) and decimal values.
impl FromStr for ModuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut id = ModuleId::NONE;
        let mut seen = false;

        for token in s.split([',', '|']).map(str::trim).filter(|t| !t.is_empty()) {
            id |= ModuleId::parse_token(token)?;
            seen = true;
        }

        if !seen {
            return Err("Empty module list".to_string());
        }
        Ok(id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ModuleIdRepr {
    Bits(u64),
    Text(String),
}

impl TryFrom<ModuleIdRepr> for ModuleId {
    type Error = String;

    fn try_from(repr: ModuleIdRepr) -> Result<Self, Self::Error> {
        match repr {
            ModuleIdRepr::Bits(bits) => Ok(ModuleId(bits)),
            ModuleIdRepr::Text(text) => text.parse(),
        }
    }
}
