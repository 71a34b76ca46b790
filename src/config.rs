use crate::CostModel;

/// What deleting a source node implies for its children.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Deletion {
    /// Only the node itself goes away; its children remain free to match any node their own
    /// constraints allow, including children of other matched nodes.
    #[default]
    Node,

    /// The whole subtree goes away with the node, so every descendant must be deleted too.
    ///
    /// This is the model of the forest-distance recursion: under it the cheapest enumerated
    /// mapping always costs exactly the [edit distance][crate::edit_distance].
    Subtree,
}

/// How the forest-distance recursion prices inserting or deleting a whole subtree.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SubtreeMeasure {
    /// One unit per node of the subtree.
    #[default]
    Nodes,

    /// One unit per leaf of the subtree, as if only leaves could ever be edited.
    ///
    /// This underestimates structural changes and does not agree with the enumerator.
    Leaves,
}

/// Knobs shared by the enumerator and the forest-distance recursion.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Config {
    pub costs: CostModel,
    pub deletion: Deletion,
    pub measure: SubtreeMeasure,
}

impl Config {
    pub fn with_costs(self, costs: CostModel) -> Self {
        Config { costs, ..self }
    }

    pub fn with_deletion(self, deletion: Deletion) -> Self {
        Config { deletion, ..self }
    }

    pub fn with_measure(self, measure: SubtreeMeasure) -> Self {
        Config { measure, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEL_COST;

    #[test]
    fn defaults_follow_the_unconstrained_node_model() {
        let c = Config::default();
        assert_eq!(c.deletion, Deletion::Node);
        assert_eq!(c.measure, SubtreeMeasure::Nodes);
        assert_eq!(c.costs.deletion, DEL_COST);
    }

    #[test]
    fn builders_replace_a_single_field() {
        let costs = CostModel {
            deletion: 3,
            ..CostModel::default()
        };

        let c = Config::default()
            .with_deletion(Deletion::Subtree)
            .with_costs(costs);

        assert_eq!(c.deletion, Deletion::Subtree);
        assert_eq!(c.costs, costs);
        assert_eq!(c.measure, SubtreeMeasure::Nodes);
        assert_eq!(
            c.with_measure(SubtreeMeasure::Leaves).deletion,
            Deletion::Subtree
        );
    }
}
