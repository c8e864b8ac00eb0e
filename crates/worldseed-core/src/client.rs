//! Version-scoped root records: supported game clients and the cash shop
//! category taxonomy.

use crate::collection::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClientLanguage {
    #[default]
    English,
    Korean,
    Japanese,
    Chinese,
    Vietnamese,
    Filipino,
    Thai,
}

/// A game client build that may connect to this configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameClientDefinition {
    pub season: u8,
    pub episode: u8,
    pub language: ClientLanguage,
    /// Protocol version bytes the client sends on login.
    pub version: Vec<u8>,
    /// Client serial bytes the client sends on login.
    pub serial: Vec<u8>,
    pub description: String,
}

impl Entity for GameClientDefinition {
    const KIND: &'static str = "client definition";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashShopCategory {
    pub name: String,
    pub display_order: u16,
    pub is_visible: bool,
}

impl Entity for CashShopCategory {
    const KIND: &'static str = "cash shop category";
}
