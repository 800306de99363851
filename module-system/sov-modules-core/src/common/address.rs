use core::fmt;
use core::hash::Hash;
use core::str::FromStr;

use bech32::{FromBase32, ToBase32};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::de::DeserializeOwned;

use crate::common::error::Bech32ParseError;

/// Human readable part of every bech32m encoded [`Address`].
pub const HRP: &str = "sov";

/// Minimal set of capabilities an address type must provide to identify a
/// participant of the module system.
pub trait BasicAddress:
    fmt::Debug
    + fmt::Display
    + Clone
    + Eq
    + Hash
    + Send
    + Sync
    + AsRef<[u8]>
    + From<[u8; 32]>
    + FromStr<Err = anyhow::Error>
    + serde::Serialize
    + DeserializeOwned
    + BorshSerialize
    + BorshDeserialize
    + 'static
{
}

/// A 32 byte identity, usually derived by hashing a public key.
#[derive(PartialEq, Clone, Copy, Eq, BorshDeserialize, BorshSerialize, Hash)]
pub struct Address {
    addr: [u8; 32],
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.addr
    }
}

impl Address {
    /// Creates a new address containing the given bytes
    pub const fn new(addr: [u8; 32]) -> Self {
        Self { addr }
    }

    /// Encodes the address as a bech32m string with the [`HRP`] prefix.
    pub fn to_bech32m(&self) -> Result<String, Bech32ParseError> {
        vec_to_bech32m(&self.addr, HRP)
    }
}

impl<'a> TryFrom<&'a [u8]> for Address {
    type Error = anyhow::Error;

    fn try_from(addr: &'a [u8]) -> Result<Self, Self::Error> {
        if addr.len() != 32 {
            anyhow::bail!("Address must be 32 bytes long");
        }
        let mut addr_bytes = [0u8; 32];
        addr_bytes.copy_from_slice(addr);
        Ok(Self { addr: addr_bytes })
    }
}

impl FromStr for Address {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hrp, data) = bech32m_to_decoded_vec(s)?;
        if hrp != HRP {
            return Err(Bech32ParseError::WrongHRP(hrp).into());
        }
        Address::try_from(data.as_slice())
    }
}

impl From<[u8; 32]> for Address {
    fn from(addr: [u8; 32]) -> Self {
        Self { addr }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_bech32m() {
            Ok(encoded) => write!(f, "{encoded}"),
            Err(_) => write!(f, "0x{}", hex::encode(self.addr)),
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serde::Serialize::serialize(&self.addr, serializer)
        }
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let encoded: String = serde::Deserialize::deserialize(deserializer)?;
            Address::from_str(&encoded).map_err(serde::de::Error::custom)
        } else {
            let addr = <[u8; 32] as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Address { addr })
        }
    }
}

impl BasicAddress for Address {}

/// Encodes raw bytes as a bech32m string under the given human readable part.
pub fn vec_to_bech32m(vec: &[u8], hrp: &str) -> Result<String, Bech32ParseError> {
    let data = vec.to_base32();
    let bech32_addr = bech32::encode(hrp, data, bech32::Variant::Bech32m)?;
    Ok(bech32_addr)
}

/// Decodes a bech32 string into its human readable part and payload bytes.
pub fn bech32m_to_decoded_vec(bech32_addr: &str) -> Result<(String, Vec<u8>), Bech32ParseError> {
    let (hrp, data, _) = bech32::decode(bech32_addr)?;
    let vec = Vec::<u8>::from_base32(&data)?;
    Ok((hrp, vec))
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_address_serialization() {
        let address = Address::from([11; 32]);
        let data: String = serde_json::to_string(&address).unwrap();
        let deserialized_address = serde_json::from_str::<Address>(&data).unwrap();

        assert_eq!(address, deserialized_address);
        assert_eq!(
            deserialized_address.to_string(),
            "sov1pv9skzctpv9skzctpv9skzctpv9skzctpv9skzctpv9skzctpv9stup8tx"
        );
    }

    #[test]
    fn test_wrong_hrp_is_rejected() {
        let encoded = vec_to_bech32m(&[11; 32], "cosmos").unwrap();
        let err = Address::from_str(&encoded).unwrap_err();
        assert!(err.to_string().contains("Wrong HRP"), "{err}");
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let encoded = vec_to_bech32m(&[11; 20], HRP).unwrap();
        assert!(Address::from_str(&encoded).is_err());
    }

    proptest! {
        #[test]
        fn display_parses_back(bytes in any::<[u8; 32]>()) {
            let address = Address::from(bytes);
            let parsed = Address::from_str(&address.to_string()).unwrap();
            prop_assert_eq!(address, parsed);
        }
    }
}
