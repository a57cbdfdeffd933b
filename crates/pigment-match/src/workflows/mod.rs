pub mod consultation;
pub mod phototype;
pub mod pigments;
