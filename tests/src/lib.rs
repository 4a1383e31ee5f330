//! Cross-crate tests that drive the core through real definition files.

#[cfg(test)]
mod util;

#[cfg(test)]
mod translation;

#[cfg(test)]
mod session;
