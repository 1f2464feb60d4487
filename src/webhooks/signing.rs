use hmac::{Hmac, Mac, NewMac};
use sha2::Sha256;
use tracing::{debug, trace};

use crate::webhooks::{decode, Error, Webhook};

type HmacSha256 = Hmac<Sha256>;

// GitHub style signatures put a prefix in front of the hex SHA256
const SIGNATURE_PREFIX: &str = "sha256=";
const SIGNATURE_LEN: usize = 32;

/// Provides the secret used to check the authenticity of a webhook, usually picked from the
/// webhook's repository.
pub type SecretFunc<'a> = dyn Fn(&Webhook) -> Result<String, Error> + 'a;

/// Turns a provider request into a verified [`Webhook`].
///
/// Implementations own the provider specific parts: finding the signature, reading the body and
/// mapping the provider's payload to the normalized model.
pub trait WebhookParser {
    type Request;

    fn parse(&self, request: &Self::Request, secret: &SecretFunc) -> Result<Webhook, Error>;
}

fn mac(secret: &str) -> Result<HmacSha256, Error> {
    HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| Error::InvalidSignature)
}

/// Computes the `sha256=<hex>` signature of `data`.
pub fn sign(secret: &str, data: &[u8]) -> Result<String, Error> {
    let mut mac = mac(secret)?;
    mac.update(data);

    Ok(format!(
        "{}{}",
        SIGNATURE_PREFIX,
        hex::encode(mac.finalize().into_bytes())
    ))
}

/// Checks a `sha256=<hex>` signature of `data`, fails with [`Error::InvalidSignature`] when it
/// doesn't match or can't be read.
pub fn validate_signature(secret: &str, signature: &str, data: &[u8]) -> Result<(), Error> {
    trace!("validating signature...");
    let mut mac = mac(secret)?;
    mac.update(data);

    let signature = match signature.strip_prefix(SIGNATURE_PREFIX) {
        Some(s) => s,
        None => {
            trace!("couldn't strip prefix from signature `{}`", signature);
            return Err(Error::InvalidSignature);
        }
    };

    let bytes = hex::decode(signature).map_err(|_| {
        trace!("couldn't decode hex-encoded signature {}", signature);
        Error::InvalidSignature
    })?;
    if bytes.len() != SIGNATURE_LEN {
        trace!("signature has {} bytes, expected {}", bytes.len(), SIGNATURE_LEN);
        return Err(Error::InvalidSignature);
    }

    mac.verify(&bytes).map_err(|_| Error::InvalidSignature)
}

/// A serialized webhook envelope along with the signature of its bytes.
#[derive(Debug, Clone)]
pub struct SignedPayload {
    pub signature: String,
    pub body: Vec<u8>,
}

/// Reads signed envelopes, as produced by [`encode`](crate::webhooks::encode).
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvelopeParser;

impl WebhookParser for EnvelopeParser {
    type Request = SignedPayload;

    fn parse(&self, request: &SignedPayload, secret: &SecretFunc) -> Result<Webhook, Error> {
        // the secret may depend on the repository, so decode before checking
        let webhook = decode(&request.body)?;
        let secret = secret(&webhook)?;

        validate_signature(&secret, &request.signature, &request.body)?;
        debug!(
            "validated {} webhook for {}",
            webhook.kind(),
            webhook.repository()
        );

        Ok(webhook)
    }
}
