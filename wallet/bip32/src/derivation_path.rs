//! Derivation paths

use crate::{ChildNumber, Error, Result};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Prefix for all derivation paths.
const PREFIX: &str = "m";

/// Derivation paths within a hierarchical keyspace.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DerivationPath {
    path: Vec<ChildNumber>,
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<DerivationPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DerivationPathVisitor;
        impl de::Visitor<'_> for DerivationPathVisitor {
            type Value = DerivationPath;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a derivation path string such as `m/44'/60'/0'/0/0`")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                DerivationPath::from_str(value).map_err(|err| de::Error::custom(err.to_string()))
            }
        }

        deserializer.deserialize_str(DerivationPathVisitor)
    }
}

impl Serialize for DerivationPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl DerivationPath {
    /// Iterate over the [`ChildNumber`] values in this derivation path.
    pub fn iter(&self) -> impl Iterator<Item = ChildNumber> + '_ {
        self.path.iter().cloned()
    }

    /// Is this derivation path empty? (i.e. the root)
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Get the count of [`ChildNumber`] values in this derivation path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Get the parent [`DerivationPath`] for the current one.
    ///
    /// Returns `None` if this is already the root path.
    pub fn parent(&self) -> Option<Self> {
        self.path.len().checked_sub(1).map(|n| {
            let mut parent = self.clone();
            parent.path.truncate(n);
            parent
        })
    }

    /// Push a [`ChildNumber`] onto an existing derivation path.
    pub fn push(&mut self, child_number: ChildNumber) {
        self.path.push(child_number)
    }
}

impl AsRef<[ChildNumber]> for DerivationPath {
    fn as_ref(&self) -> &[ChildNumber] {
        &self.path
    }
}

impl Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;

        for child_number in self.iter() {
            write!(f, "/{}", child_number)?;
        }

        Ok(())
    }
}

impl Extend<ChildNumber> for DerivationPath {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = ChildNumber>,
    {
        self.path.extend(iter);
    }
}

impl FromIterator<ChildNumber> for DerivationPath {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = ChildNumber>,
    {
        DerivationPath { path: iter.into_iter().collect() }
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    /// Parses `m/<step>/<step>/...`, where a step is a decimal index below
    /// 2^31 optionally followed by `'` for hardened derivation. At least one
    /// step is required; a bare `m` is rejected.
    fn from_str(path: &str) -> Result<DerivationPath> {
        let steps = path
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| Error::MalformedPath(format!("derivation path `{path}` does not start with `{PREFIX}/`")))?;

        Ok(DerivationPath { path: steps.split('/').map(str::parse).collect::<Result<_>>()? })
    }
}

impl IntoIterator for DerivationPath {
    type Item = ChildNumber;
    type IntoIter = std::vec::IntoIter<ChildNumber>;

    fn into_iter(self) -> std::vec::IntoIter<ChildNumber> {
        self.path.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::DerivationPath;
    use crate::{ChildNumber, Error};

    #[test]
    fn round_trip() {
        for path in [
            "m/0",
            "m/0/2147483647'",
            "m/0/2147483647'/1",
            "m/0/2147483647'/1/2147483646'",
            "m/44'/60'/0'/0/0",
        ] {
            assert_eq!(path.parse::<DerivationPath>().unwrap().to_string(), path);
        }
    }

    #[test]
    fn hardened_offset_is_applied() {
        let path = "m/44'/60'/0'/0/7".parse::<DerivationPath>().unwrap();
        let indices: Vec<u32> = path.iter().map(u32::from).collect();
        assert_eq!(indices, vec![0x8000002c, 0x8000003c, 0x80000000, 0, 7]);
    }

    #[test]
    fn malformed_paths() {
        for path in ["", "m", "/0", "0/1", "M/0", "m0", "m/", "m//1", "m/0/", "m/x", "m/2147483648", "m/1'/-2", " m/0"] {
            assert!(matches!(path.parse::<DerivationPath>(), Err(Error::MalformedPath(_))), "{path:?} should be rejected");
        }
    }

    #[test]
    fn parent() {
        let path_m_0_2147483647h = "m/0/2147483647'".parse::<DerivationPath>().unwrap();
        let path_m_0 = path_m_0_2147483647h.parent().unwrap();
        assert_eq!("m/0", path_m_0.to_string());

        // the root renders as `m` but does not parse back
        let path_m = path_m_0.parent().unwrap();
        assert!(path_m.is_empty());
        assert_eq!("m", path_m.to_string());
        assert_eq!(path_m.parent(), None);
        assert!(matches!(path_m.to_string().parse::<DerivationPath>(), Err(Error::MalformedPath(_))));
    }

    #[test]
    fn serde_as_string() {
        let path: DerivationPath = serde_json::from_str("\"m/44'/60'/0'/0/1\"").unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.as_ref()[4], ChildNumber(1));
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"m/44'/60'/0'/0/1\"");
        assert!(serde_json::from_str::<DerivationPath>("\"n/0\"").is_err());
    }
}
