//! Seam for the external transaction collaborator.
//!
//! Building and signing transactions is out of scope for this crate;
//! the client only needs the recent-blockhash slot and the signed wire
//! bytes, so the collaborator is a trait.

/// A transaction the client can submit.
///
/// During [`crate::Client::send_transaction`] the client resolves a
/// recent blockhash if none is recorded and applies it through
/// [`Transaction::set_recent_blockhash`], then asks the transaction to
/// sign and serialize itself. A transaction must not be mutated or
/// resubmitted concurrently with an in-flight submission; the `&mut`
/// receiver enforces that within one client.
pub trait Transaction {
    /// The blockhash scoping this transaction's validity window, if one
    /// has already been recorded.
    fn recent_blockhash(&self) -> Option<&str>;

    /// Record the blockhash the transaction will be signed against.
    fn set_recent_blockhash(&mut self, blockhash: String);

    /// Sign with the transaction's configured signers.
    fn sign(&mut self);

    /// Wire-format bytes of the signed transaction.
    fn serialize(&self) -> Vec<u8>;
}
