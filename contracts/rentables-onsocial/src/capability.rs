//! ERC-165 style capability probing over a fixed interface table.

use crate::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Erc165,
    Erc721,
    Erc721Metadata,
    Erc721Enumerable,
    Erc4907,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::Erc165,
        Capability::Erc721,
        Capability::Erc721Metadata,
        Capability::Erc721Enumerable,
        Capability::Erc4907,
    ];

    pub const fn interface_id(self) -> [u8; 4] {
        match self {
            Capability::Erc165 => [0x01, 0xff, 0xc9, 0xa7],
            Capability::Erc721 => [0x80, 0xac, 0x58, 0xcd],
            Capability::Erc721Metadata => [0x5b, 0x5e, 0x13, 0x9f],
            Capability::Erc721Enumerable => [0x78, 0x0e, 0x9d, 0x63],
            Capability::Erc4907 => [0xad, 0x09, 0x2b, 0x5c],
        }
    }

    pub fn from_interface_id(interface_id: [u8; 4]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.interface_id() == interface_id)
    }

    /// Accepts `0x`-prefixed or bare hex, any case. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .unwrap_or(raw);
        let bytes: [u8; 4] = hex::decode(digits).ok()?.try_into().ok()?;
        Self::from_interface_id(bytes)
    }

    pub fn hex_id(self) -> String {
        format!("0x{}", hex::encode(self.interface_id()))
    }
}

#[near]
impl Contract {
    pub fn supports_interface(&self, interface_id: String) -> bool {
        Capability::parse(&interface_id).is_some()
    }

    pub fn supported_interfaces(&self) -> Vec<String> {
        Capability::ALL.into_iter().map(Capability::hex_id).collect()
    }
}
