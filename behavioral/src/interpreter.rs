//! Pattern 3: Interpreter
//!
//! A closed grammar for integer expressions. Evaluation dispatches by
//! matching on the variant tag; the grammar is sealed, so every node kind
//! is handled right here.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(i64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn interpret(&self) -> i64 {
        match self {
            Expr::Literal(n) => *n,
            Expr::Add(left, right) => left.interpret() + right.interpret(),
            Expr::Sub(left, right) => left.interpret() - right.interpret(),
            Expr::Mul(left, right) => left.interpret() * right.interpret(),
        }
    }

    /// Fully parenthesized rendering, useful in traces.
    pub fn render(&self) -> String {
        match self {
            Expr::Literal(n) => n.to_string(),
            Expr::Add(left, right) => format!("({} + {})", left.render(), right.render()),
            Expr::Sub(left, right) => format!("({} - {})", left.render(), right.render()),
            Expr::Mul(left, right) => format!("({} * {})", left.render(), right.render()),
        }
    }
}

pub fn lit(n: i64) -> Expr {
    Expr::Literal(n)
}

pub fn add(left: Expr, right: Expr) -> Expr {
    Expr::Add(Box::new(left), Box::new(right))
}

pub fn sub(left: Expr, right: Expr) -> Expr {
    Expr::Sub(Box::new(left), Box::new(right))
}

pub fn mul(left: Expr, right: Expr) -> Expr {
    Expr::Mul(Box::new(left), Box::new(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn literals_interpret_to_themselves() {
        assert_eq!(lit(42).interpret(), 42);
    }

    #[test]
    fn nested_expressions_evaluate_inside_out() {
        let expr = mul(sub(lit(7), lit(2)), lit(3));
        assert_eq!(expr.interpret(), 15);
        assert_eq!(expr.render(), "((7 - 2) * 3)");
    }

    #[test]
    fn addition_and_subtraction_compose() {
        let expr = add(lit(1), sub(lit(10), lit(4)));
        assert_eq!(expr.interpret(), 7);
    }

    // Sums and differences of a few i32-range leaves stay far inside i64.
    fn sum_expr_strategy() -> impl Strategy<Value = Expr> {
        let leaf = any::<i32>().prop_map(|n| lit(n as i64));
        leaf.prop_recursive(4, 16, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| add(l, r)),
                (inner.clone(), inner).prop_map(|(l, r)| sub(l, r)),
            ]
        })
    }

    proptest! {
        #[test]
        fn interpreting_twice_replays_the_same_value(expr in sum_expr_strategy()) {
            prop_assert_eq!(expr.interpret(), expr.interpret());
        }
    }
}
