crate::vocab_type! {
	/// Public key of an actor, used to verify HTTP signatures.
	pub struct PublicKey in Security { key }
}
