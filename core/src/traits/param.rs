/// A marker trait for types that can be used as SQL parameters.
///
/// This trait is used as a bound on the parameter type in SQL fragments.
/// The dialect is chosen when a fragment is rendered, not by the value type.
pub trait SQLParam: Clone + core::fmt::Debug {}
