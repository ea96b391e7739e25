use formgen_common::PropertyBag;

/// Translation of a directive's options into a component property bag
pub trait ToProps {
    /// Every parameter name this directive may place in a bag
    fn option_names() -> Vec<&'static str>
    where
        Self: Sized;

    /// Options that differ from their defaults, keyed by parameter name
    fn to_props(&self) -> PropertyBag;
}
