use glint_common::{GroundTypeName, Position, Span};
use glint_solver::{Constraints, MonoType, NumericOrigin};

fn dummy_span() -> Span {
    Span::at(Position::start())
}

#[test]
fn function_call_site_pins_parameter_and_return_types() {
    // Models `fn add(a, b) -> a + b` applied to two int literals: the
    // parameter variables get equated with the argument variables, and
    // the numeric origins default once nothing else constrains them.
    let mut constraints = Constraints::new();
    let param_a = constraints.fresh();
    let param_b = constraints.fresh();
    let arg_a = constraints.fresh_numeric(NumericOrigin::Int);
    let arg_b = constraints.fresh_numeric(NumericOrigin::Int);

    constraints.equate(MonoType::TypeVar(param_a), MonoType::TypeVar(arg_a), dummy_span());
    constraints.equate(MonoType::TypeVar(param_b), MonoType::TypeVar(arg_b), dummy_span());

    let (subst, errors) = glint_solver::solve(&constraints);
    assert!(errors.is_empty());
    assert_eq!(subst.resolve(&MonoType::TypeVar(param_a)), MonoType::Ground(GroundTypeName::I32));
    assert_eq!(subst.resolve(&MonoType::TypeVar(param_b)), MonoType::Ground(GroundTypeName::I32));
}

#[test]
fn substitution_applied_to_a_typed_function_leaves_no_free_numeric_vars() {
    let mut constraints = Constraints::new();
    let param = constraints.fresh_numeric(NumericOrigin::Float);
    let func_ty = MonoType::function([MonoType::TypeVar(param)], MonoType::TypeVar(param));

    let (subst, errors) = glint_solver::solve(&constraints);
    assert!(errors.is_empty());

    let applied = subst.apply(&func_ty);
    match applied {
        MonoType::Function { parameters, return_type } => {
            assert_eq!(parameters[0], MonoType::Ground(GroundTypeName::F64));
            assert_eq!(*return_type, MonoType::Ground(GroundTypeName::F64));
        }
        other => panic!("expected Function, got {other:?}"),
    }
}
