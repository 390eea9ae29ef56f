// Contact form: client-side style validation plus a simulated send.
// The transport is a trait seam; the only implementation transmits nothing.

pub mod handlers;
pub mod submission;
pub mod validation;
