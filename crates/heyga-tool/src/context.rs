use heyga_core::ToolContext;

/// Default implementation of ToolContext
#[derive(Debug, Clone)]
pub struct DefaultToolContext {
    function_call_id: String,
    invocation_id: String,
}

impl DefaultToolContext {
    pub fn new(function_call_id: String, invocation_id: String) -> Self {
        Self {
            function_call_id,
            invocation_id,
        }
    }

    /// Context with freshly generated ids, for standalone invocations
    /// outside a hosting runtime.
    pub fn generate() -> Self {
        Self {
            function_call_id: format!("call-{}", uuid::Uuid::new_v4()),
            invocation_id: format!("inv-{}", uuid::Uuid::new_v4()),
        }
    }
}

impl ToolContext for DefaultToolContext {
    fn function_call_id(&self) -> &str {
        &self.function_call_id
    }

    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }
}
