use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first), visiting every child before its parent.
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression is the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        self.last_visited.is_some_and(|last_visited| std::ptr::eq(last_visited, expr))
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr {
                Expr::Number(_) | Expr::Symbol(_) => return self.visit(),
                Expr::Binary(_, lhs, rhs) => {
                    if self.is_last_visited(rhs) {
                        return self.visit();
                    }
                    self.stack.push(rhs);
                    self.stack.push(lhs);
                },
                Expr::Unary(_, operand) => {
                    if self.is_last_visited(operand) {
                        return self.visit();
                    }
                    self.stack.push(operand);
                },
                Expr::Call(_, args) => match args.last() {
                    Some(last) if !self.is_last_visited(last) => {
                        self.stack.extend(args.iter().rev());
                    },
                    _ => return self.visit(),
                },
            }
        }
    }
}
