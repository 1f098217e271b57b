//! Serializers from the markup tree to source text.

mod tsx;

pub use tsx::{GeneratorOptions, TsxGenerator};

use nodewind_core::MarkupNode;

/// Common trait for markup serializers.
///
/// Rendering never fails and never mutates the tree, so rendering the same
/// tree twice yields identical text.
pub trait MarkupGenerator {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Render `node` and its subtree at the given indentation depth.
    fn render(&self, node: &MarkupNode, depth: usize) -> String;

    /// Render a whole tree from depth zero.
    fn generate(&self, tree: &MarkupNode) -> String {
        self.render(tree, 0)
    }
}
