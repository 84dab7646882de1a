use crate::ast::{
    Argument, AttributeExpr, Comparison, FunctionCall, Literal, LogicalExpr, LogicalOp,
};

use super::{Attempt, Parser};

impl Parser<'_> {
    /// `attribute comparator literal`
    fn comparison(&mut self) -> Attempt<Comparison> {
        let mark = self.lexer.position();

        let Some(left) = self.lexer.attribute()? else {
            return Ok(None);
        };
        let Some(op) = self.lexer.comparator() else {
            self.lexer.reset(mark);
            return Ok(None);
        };

        let right = match self.lexer.number()? {
            Some(n) => Literal::Number(n),
            None => match self.lexer.string()? {
                Some(s) => Literal::String(s),
                None => {
                    self.lexer.reset(mark);
                    return Ok(None);
                }
            },
        };

        Ok(Some(Comparison { left, op, right }))
    }

    /// Left-associative chain of `operand (keyword operand)*`, collected
    /// into one flat `Chain`. A keyword with no operand after it is left for
    /// the caller to reject.
    fn logical_chain(
        &mut self,
        op: LogicalOp,
        mut operand: impl FnMut(&mut Self) -> Attempt<LogicalExpr>,
    ) -> Attempt<LogicalExpr> {
        let Some(first) = operand(self)? else {
            return Ok(None);
        };

        let mut operands = vec![first];
        loop {
            let mark = self.lexer.position();
            if !self.lexer.symbol(op.keyword()) {
                break;
            }

            let Some(next) = operand(self)? else {
                self.lexer.reset(mark);
                break;
            };
            operands.push(next);
        }

        if operands.len() == 1 {
            return Ok(operands.pop());
        }
        Ok(Some(LogicalExpr::Chain { op, operands }))
    }

    fn and_expression(&mut self) -> Attempt<LogicalExpr> {
        self.logical_chain(LogicalOp::And, |parser| {
            Ok(parser.comparison()?.map(LogicalExpr::Comparison))
        })
    }

    fn or_expression(&mut self) -> Attempt<LogicalExpr> {
        self.logical_chain(LogicalOp::Or, Self::and_expression)
    }

    /// Comparisons joined by `and`/`or`; `and` binds tighter
    pub(super) fn logical_expression(&mut self) -> Attempt<LogicalExpr> {
        self.or_expression()
    }

    /// Attribute index, string, float, then integer
    fn argument(&mut self) -> Attempt<Argument> {
        if let Some(index) = self.lexer.attribute()? {
            return Ok(Some(Argument::Attribute(index)));
        }
        if let Some(s) = self.lexer.string()? {
            return Ok(Some(Argument::String(s)));
        }
        if let Some(n) = self.lexer.float()? {
            return Ok(Some(Argument::Number(n.into())));
        }
        Ok(self.lexer.integer()?.map(|n| Argument::Number(n.into())))
    }

    /// `identifier "(" [argument ("," argument)*] ")"`
    pub(super) fn function_call(&mut self) -> Attempt<FunctionCall> {
        let mark = self.lexer.position();

        let Some(name) = self.lexer.identifier() else {
            return Ok(None);
        };
        if !self.lexer.symbol("(") {
            self.lexer.reset(mark);
            return Ok(None);
        }

        let args = self.separated(",", Self::argument)?.unwrap_or_default();

        if !self.lexer.symbol(")") {
            self.lexer.reset(mark);
            return Ok(None);
        }

        Ok(Some(FunctionCall { name, args }))
    }

    /// Tried in order: logical expression, function call, attribute index,
    /// dimension selector. The comparison form must come before the bare
    /// attribute index that prefixes it.
    pub(super) fn attribute_expression(&mut self) -> Attempt<AttributeExpr> {
        if let Some(expr) = self.logical_expression()? {
            return Ok(Some(AttributeExpr::Logical(expr)));
        }
        if let Some(call) = self.function_call()? {
            return Ok(Some(AttributeExpr::Call(call)));
        }
        if let Some(index) = self.lexer.attribute()? {
            return Ok(Some(AttributeExpr::Attribute(index)));
        }
        Ok(self.dimension_selector()?.map(AttributeExpr::Dimension))
    }
}
