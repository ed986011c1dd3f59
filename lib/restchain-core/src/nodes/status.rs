use crate::{NodeKind, ProcessorNode, Response, Result};

/// Maps any successful response to `()`, ignoring the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitAsSuccessProcessor;

impl<S> ProcessorNode<(), S> for UnitAsSuccessProcessor {
    fn can_process(&self, response: &Response) -> bool {
        response.is_success()
    }

    fn process(&self, _response: &Response, _serializer: &S) -> Result<()> {
        Ok(())
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Simple
    }
}

/// Maps 404 to `false` and any successful response to `true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolAsNotFoundProcessor;

impl<S> ProcessorNode<bool, S> for BoolAsNotFoundProcessor {
    fn can_process(&self, response: &Response) -> bool {
        response.is_not_found() || response.is_success()
    }

    fn process(&self, response: &Response, _serializer: &S) -> Result<bool> {
        Ok(!response.is_not_found())
    }

    fn kind(&mut self) -> NodeKind<'_, S> {
        NodeKind::Simple
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::JsonSerializer;

    fn unit_can_process(status: u16) -> bool {
        ProcessorNode::<(), JsonSerializer>::can_process(&UnitAsSuccessProcessor, &Response::new(status))
    }

    fn bool_can_process(status: u16) -> bool {
        ProcessorNode::<bool, JsonSerializer>::can_process(&BoolAsNotFoundProcessor, &Response::new(status))
    }

    #[test]
    fn unit_takes_success_only() {
        check!(unit_can_process(200));
        check!(unit_can_process(204));
        check!(!unit_can_process(404));
        check!(!unit_can_process(500));

        let response = Response::new(201).with_body("ignored");
        let_assert!(Ok(()) = UnitAsSuccessProcessor.process(&response, &JsonSerializer::new()));
    }

    #[test]
    fn bool_maps_not_found() {
        check!(bool_can_process(200));
        check!(bool_can_process(404));
        check!(!bool_can_process(400));
        check!(!bool_can_process(500));

        let json = JsonSerializer::new();
        let_assert!(Ok(true) = BoolAsNotFoundProcessor.process(&Response::new(200), &json));
        let_assert!(Ok(false) = BoolAsNotFoundProcessor.process(&Response::new(404), &json));
    }
}
