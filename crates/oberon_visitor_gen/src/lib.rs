//! Used for easily creating visitor patterns

#[doc(hidden)]
pub use paste;

/// Creates a visitor trait.
///
/// Every `visit` entry becomes two items:
/// - a free function `walk_<name>` holding the given body, which is the default traversal of
///   the visited type
/// - a trait method `visit_<name>` whose default implementation calls `walk_<name>`
///
/// Implementors override only the `visit_*` methods they care about, and can call the matching
/// `walk_*` function to continue into the children.
///
/// ```
/// use oberon_visitor_gen::visitor;
///
/// pub struct Leaf(pub u32);
/// pub struct Pair(pub Leaf, pub Leaf);
///
/// visitor! {
///     pub trait SumVisitor {
///         type Err = String;
///
///         pub visit fn pair(v, pair: &Pair) {
///             v.visit_leaf(&pair.0)?;
///             v.visit_leaf(&pair.1)
///         }
///
///         pub visit fn leaf(_v, _leaf: &Leaf) {
///             Ok(())
///         }
///     }
/// }
///
/// struct Sum(u32);
///
/// impl SumVisitor for Sum {
///     fn visit_leaf(&mut self, leaf: &Leaf) -> Result<(), String> {
///         self.0 += leaf.0;
///         Ok(())
///     }
/// }
///
/// let mut sum = Sum(0);
/// sum.visit_pair(&Pair(Leaf(1), Leaf(2))).unwrap();
/// assert_eq!(sum.0, 3);
/// ```
#[macro_export]
macro_rules! visitor {
    (
        $(#[$trait_meta:meta])*
        $trait_vis:vis trait $id:ident {
            type Err = $err:ty;

            $(
                $(#[$fn_meta:meta])*
                $vis:vis visit fn $name:ident ($visitor_id:ident, $visited_id:ident: &$visited:ty) $block:block
            )+
        }
    ) => {
        $(
        $crate::paste::paste! {
            $(#[$fn_meta])*
            $vis fn [<walk_ $name>]<V: $id + ?Sized>($visitor_id: &mut V, $visited_id: &$visited) -> ::std::result::Result<(), $err> {
                $block
            }
        }
        )+

        $(#[$trait_meta])*
        $trait_vis trait $id {
            $(
            $crate::paste::paste! {
                $(#[$fn_meta])*
                fn [<visit_ $name>](&mut self, $visited_id: &$visited) -> ::std::result::Result<(), $err> {
                    [<walk_ $name>](self, $visited_id)
                }
            }
            )+
        }
    };
}
