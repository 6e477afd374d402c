//! Compact text encoding of trees.
//!
//! A tree is serialized to JSON and the JSON text is base64 encoded, giving a
//! single opaque token that is safe to store in text columns or pass around in
//! headers. Sequential nodes come back as sequential nodes and associative
//! nodes as associative ones.

use base64ct::{Base64, Encoding};

use crate::{Error, Result, tree::Value};

/// Encodes `value` as base64 JSON.
///
/// ```
/// # use arbor::{Node, Value, codec::{decode_compact, encode_compact}};
/// let value = Value::Node(Node::from_values([1, 2]));
/// let token = encode_compact(&value).unwrap();
/// assert_eq!(token, "WzEsMl0=");
/// assert_eq!(decode_compact(&token).unwrap(), value);
/// ```
pub fn encode_compact(value: &Value) -> Result<String> {
    let json = serde_json::to_vec(value)?;
    Ok(Base64::encode_string(&json))
}

/// Decodes a token produced by [`encode_compact`].
///
/// Returns [`Error::Decode`] if the token is not valid base64 and
/// [`Error::Serialize`] if the decoded bytes are not valid JSON.
pub fn decode_compact(token: &str) -> Result<Value> {
    let bytes = Base64::decode_vec(token.trim()).map_err(|e| Error::Decode {
        reason: format!("invalid base64: {e}"),
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}
