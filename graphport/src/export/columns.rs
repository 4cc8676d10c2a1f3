//! Input declaration and output binding against the drop sets.

use crate::export::config::DropSet;
use crate::graph::GraphContext;
use crate::pipeline::Schema;

/// Declares graph inputs from the pipeline source's schema.
///
/// Columns are declared in schema order, skipping any name in the input
/// drop set. Each declared input seeds the variable table with
/// `name -> name`.
pub fn declare_inputs(ctx: &mut GraphContext, source: &Schema, input_drop: &DropSet) {
    for column in source.iter() {
        if input_drop.contains(&column.name) {
            continue;
        }
        ctx.add_input(column.ty.clone(), column.name.clone());
    }
}

/// Binds graph outputs from the pipeline tail's schema.
///
/// Columns are bound in schema order. Hidden columns, names in either drop
/// set, and names with no variable binding (i.e. no exportable stage ever
/// produced or passed through that name) are silently omitted.
pub fn bind_outputs(
    ctx: &mut GraphContext,
    tail: &Schema,
    input_drop: &DropSet,
    output_drop: &DropSet,
) {
    for column in tail.iter() {
        if column.hidden
            || input_drop.contains(&column.name)
            || output_drop.contains(&column.name)
        {
            continue;
        }
        let Some(variable) = ctx.try_get_variable(&column.name) else {
            continue;
        };
        let variable = variable.to_string();
        ctx.add_output(column.ty.clone(), variable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ValueType;
    use crate::pipeline::Column;
    use pretty_assertions::assert_eq;

    fn abc_schema() -> Schema {
        Schema::new()
            .with_column(Column::new("A", ValueType::Float))
            .with_column(Column::new("B", ValueType::Float))
            .with_column(Column::new("C", ValueType::String))
    }

    fn input_names(ctx: &GraphContext) -> Vec<String> {
        ctx.inputs().iter().map(|v| v.name.clone()).collect()
    }

    fn output_names(ctx: &GraphContext) -> Vec<String> {
        ctx.outputs().iter().map(|v| v.name.clone()).collect()
    }

    #[test]
    fn test_inputs_follow_schema_order_minus_drops() {
        let mut ctx = GraphContext::new(None, None);
        declare_inputs(&mut ctx, &abc_schema(), &DropSet::parse("C"));

        assert_eq!(input_names(&ctx), vec!["A".to_string(), "B".to_string()]);
        assert_eq!(ctx.try_get_variable("A"), Some("A"));
        assert_eq!(ctx.try_get_variable("C"), None);
    }

    #[test]
    fn test_hidden_columns_are_never_bound() {
        let tail = Schema::new()
            .with_column(Column::new("A", ValueType::Float))
            .with_column(Column::new("H", ValueType::Float).hidden());

        let mut ctx = GraphContext::new(None, None);
        ctx.bind("A", "A");
        ctx.bind("H", "H");
        bind_outputs(&mut ctx, &tail, &DropSet::new(), &DropSet::new());

        assert_eq!(output_names(&ctx), vec!["A".to_string()]);
    }

    #[test]
    fn test_input_drop_also_hides_column_from_outputs() {
        let mut ctx = GraphContext::new(None, None);
        // Even a bound column stays out of the outputs when input-dropped.
        ctx.bind("C", "C");
        ctx.bind("A", "A");
        bind_outputs(&mut ctx, &abc_schema(), &DropSet::parse("C"), &DropSet::new());

        assert_eq!(output_names(&ctx), vec!["A".to_string()]);
    }

    #[test]
    fn test_unbound_columns_are_silently_omitted() {
        let mut ctx = GraphContext::new(None, None);
        ctx.bind("B", "B");
        bind_outputs(&mut ctx, &abc_schema(), &DropSet::new(), &DropSet::new());

        assert_eq!(output_names(&ctx), vec!["B".to_string()]);
    }

    #[test]
    fn test_output_drop_excludes_bound_column() {
        let mut ctx = GraphContext::new(None, None);
        ctx.bind("A", "A");
        ctx.bind("B", "B");
        bind_outputs(&mut ctx, &abc_schema(), &DropSet::new(), &DropSet::parse("B"));

        assert_eq!(output_names(&ctx), vec!["A".to_string()]);
    }
}
