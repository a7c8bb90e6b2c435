//! The closed set of node kinds and their display descriptors.
//!
//! Hosts identify kinds by short tokens (`server`, `wifi`, ...), which is also
//! what drag-start events carry from the palette. Unknown tokens resolve to
//! [`NodeKind::Server`] through [`NodeKind::from_token_or_default`], so stale
//! or legacy tokens never fail an operation.

use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of network element a node represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    #[default]
    Server,
    Router,
    Switch,
    Cloud,
    Database,
    Firewall,
    Monitor,
    Internet,
    #[serde(rename = "wifi", alias = "wifi-access-point")]
    WifiAccessPoint,
}

/// Presentation data for a [`NodeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDescriptor {
    /// Token used in events and default labels.
    pub token: &'static str,
    /// Human readable palette entry.
    pub palette_label: &'static str,
    /// Single glyph drawn inside the node in exports.
    pub glyph: &'static str,
}

impl NodeKind {
    /// Every kind in palette order.
    pub const ALL: [NodeKind; 9] = [
        NodeKind::Server,
        NodeKind::Router,
        NodeKind::Switch,
        NodeKind::Cloud,
        NodeKind::Database,
        NodeKind::Firewall,
        NodeKind::Monitor,
        NodeKind::Internet,
        NodeKind::WifiAccessPoint,
    ];

    /// Returns the display descriptor for this kind.
    pub fn descriptor(self) -> KindDescriptor {
        let (token, palette_label, glyph) = match self {
            Self::Server => ("server", "Server", "\u{25A4}"),
            Self::Router => ("router", "Router", "\u{21C4}"),
            Self::Switch => ("switch", "LAN Switch", "\u{21CC}"),
            Self::Cloud => ("cloud", "Cloud", "\u{2601}"),
            Self::Database => ("database", "Database", "\u{26C1}"),
            Self::Firewall => ("firewall", "Firewall", "\u{26E8}"),
            Self::Monitor => ("monitor", "Client", "\u{25AD}"),
            Self::Internet => ("internet", "Internet", "\u{25CD}"),
            Self::WifiAccessPoint => ("wifi", "WiFi AP", "\u{224B}"),
        };
        KindDescriptor {
            token,
            palette_label,
            glyph,
        }
    }

    /// Returns the token of this kind.
    pub fn token(self) -> &'static str {
        self.descriptor().token
    }

    /// Resolves a token, falling back to [`NodeKind::Server`] when unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use netsketch_core::node_kind::NodeKind;
    ///
    /// assert_eq!(NodeKind::from_token_or_default("router"), NodeKind::Router);
    /// assert_eq!(NodeKind::from_token_or_default("mainframe"), NodeKind::Server);
    /// ```
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_else(|err: UnknownNodeKind| {
            debug!(token = err.token.as_str(); "Unknown node kind, using default");
            Self::default()
        })
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A token that names no known [`NodeKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node kind `{token}`")]
pub struct UnknownNodeKind {
    pub token: String,
}

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token == "wifi-access-point" {
            return Ok(Self::WifiAccessPoint);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == token)
            .ok_or_else(|| UnknownNodeKind {
                token: token.to_string(),
            })
    }
}
