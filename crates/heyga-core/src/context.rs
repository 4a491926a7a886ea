/// Tool context provided during tool execution
///
/// Identifies the function call and the enclosing invocation so tool
/// logs can be correlated by the hosting runtime.
pub trait ToolContext: Send + Sync {
    fn function_call_id(&self) -> &str;
    fn invocation_id(&self) -> &str;
}
