use crate::ast::{AttributeExpr, FunctionCall, Hyperchunk, Hyperchunks, Hyperslice};

use super::{Attempt, Parser};

impl Parser<'_> {
    /// `dimension_selector ("," dimension_selector)*`
    fn hyperslice(&mut self) -> Attempt<Hyperslice> {
        Ok(self.separated(",", Self::dimension_selector)?.map(Hyperslice))
    }

    /// `"/" "order:" function_call`
    fn order_section(&mut self) -> Attempt<FunctionCall> {
        let mark = self.lexer.position();

        if self.lexer.symbol("/") && self.lexer.symbol("order:") {
            if let Some(call) = self.function_call()? {
                return Ok(Some(call));
            }
        }
        self.lexer.reset(mark);
        Ok(None)
    }

    /// `"/" hyperslice ("|" hyperslice)*`
    fn hyperslices_section(&mut self) -> Attempt<Vec<Hyperslice>> {
        let mark = self.lexer.position();

        if self.lexer.symbol("/") {
            if let Some(hyperslices) = self.separated("|", Self::hyperslice)? {
                return Ok(Some(hyperslices));
            }
        }
        self.lexer.reset(mark);
        Ok(None)
    }

    /// `"/" attribute_expression ("|" attribute_expression)*`
    fn attributes_section(&mut self) -> Attempt<Vec<AttributeExpr>> {
        let mark = self.lexer.position();

        if self.lexer.symbol("/") {
            if let Some(attributes) = self.separated("|", Self::attribute_expression)? {
                return Ok(Some(attributes));
            }
        }
        self.lexer.reset(mark);
        Ok(None)
    }

    /// `arrays ("/" attributes ("/" "order:" call)? ("/" hyperslices)?)?`
    ///
    /// Order and hyperslices can only follow an attributes section.
    pub(super) fn hyperchunk(&mut self) -> Attempt<Hyperchunk> {
        let Some(arrays) = self.separated("|", Self::dimension_selector)? else {
            return Ok(None);
        };
        let mut hyperchunk = Hyperchunk::new(arrays);

        if let Some(attributes) = self.attributes_section()? {
            hyperchunk.attributes = Some(attributes);
            hyperchunk.order = self.order_section()?;
            hyperchunk.hyperslices = self.hyperslices_section()?;
        }

        tracing::trace!(
            arrays = hyperchunk.arrays.len(),
            attributes = hyperchunk.attributes.as_ref().map_or(0, Vec::len),
            has_order = hyperchunk.order.is_some(),
            hyperslices = hyperchunk.hyperslices.as_ref().map_or(0, Vec::len),
            "parsed hyperchunk"
        );
        Ok(Some(hyperchunk))
    }

    /// `hyperchunk (";" hyperchunk)*`
    pub(super) fn hyperchunks(&mut self) -> Attempt<Hyperchunks> {
        Ok(self.separated(";", Self::hyperchunk)?.map(Hyperchunks))
    }
}
