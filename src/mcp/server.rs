//! MCP server for the Mouser Electronics API.
//!
//! This module implements the MCP server lifecycle:
//!
//! 1. **Initialisation**: Capability negotiation and version agreement
//! 2. **Operation**: Handling tool, resource, and prompt requests
//! 3. **Shutdown**: Graceful connection termination
//!
//! # Architecture
//!
//! Tool handlers are thin adapters: they pull arguments out of the call,
//! delegate to the [`ApiClient`] domain operations, and render the result
//! (or the structured error) as text content. All intelligence about
//! what to search for and what to buy stays with the AI.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::Settings;
use crate::mcp::protocol::{
    ErrorCode, IncomingMessage, JsonRpcError, JsonRpcErrorData, JsonRpcNotification,
    JsonRpcRequest, JsonRpcResponse, RequestId, MCP_PROTOCOL_VERSION, SERVER_NAME,
};
use crate::mcp::transport::StdioTransport;
use crate::mouser::{ApiClient, ApiError, ApiResult, MAX_SEARCH_RECORDS};

/// URI of the configuration-status resource.
pub const STATUS_RESOURCE_URI: &str = "mouser://status";

/// Name of the guided-workflow prompt.
pub const WORKFLOW_PROMPT_NAME: &str = "component_search_workflow";

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize received, waiting for initialized notification.
    Initialising,
    /// Ready for normal operation.
    Running,
    /// Shutdown in progress.
    ShuttingDown,
}

/// Server capabilities advertised during initialisation.
#[derive(Debug, Clone, Serialize)]
pub struct ServerCapabilities {
    /// Tool-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolCapabilities>,

    /// Resource-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceCapabilities>,

    /// Prompt-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompts: Option<PromptCapabilities>,
}

impl Default for ServerCapabilities {
    fn default() -> Self {
        Self {
            tools: Some(ToolCapabilities::default()),
            resources: Some(ResourceCapabilities::default()),
            prompts: Some(PromptCapabilities::default()),
        }
    }
}

/// Tool-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolCapabilities {
    /// Whether the tool list can change during the session.
    #[serde(rename = "listChanged", skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

/// Resource-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceCapabilities {
    /// Whether the resource list can change during the session.
    #[serde(rename = "listChanged", skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

/// Prompt-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PromptCapabilities {
    /// Whether the prompt list can change during the session.
    #[serde(rename = "listChanged", skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if requires a predicate fn(&T) -> bool, so we must take &bool here
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Server information for initialisation response.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Client information received during initialisation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// Client name.
    pub name: String,
    /// Client version.
    #[serde(default)]
    pub version: Option<String>,
}

/// Parameters for the initialize request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Protocol version requested by client.
    pub protocol_version: String,
    /// Client capabilities.
    #[serde(default)]
    pub capabilities: Value,
    /// Client information.
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
}

/// A tool definition for tools/list response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

/// Parameters for tools/call request.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    /// Name of the tool to call.
    pub name: String,
    /// Arguments for the tool.
    #[serde(default)]
    pub arguments: Value,
}

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}

/// Result of a tool call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the tool call resulted in an error.
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
}

impl ToolCallResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates an error text result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }
}

/// The MCP server bridging tool calls to the Mouser API.
pub struct McpServer {
    /// Current server state.
    state: ServerState,
    /// The transport layer.
    transport: StdioTransport,
    /// Negotiated protocol version (set after initialisation).
    protocol_version: Option<String>,
    /// The upstream API client.
    client: ApiClient,
    /// Whether the Part Search credential was present at startup.
    part_api_configured: bool,
    /// Whether the Order/Cart credential was present at startup.
    order_api_configured: bool,
    /// Configured per-request timeout, for status reporting.
    timeout_secs: u64,
}

impl McpServer {
    /// Creates a new MCP server from validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be built.
    pub fn new(settings: &Settings) -> ApiResult<Self> {
        Ok(Self {
            state: ServerState::AwaitingInit,
            transport: StdioTransport::new(),
            protocol_version: None,
            client: ApiClient::new(settings)?,
            part_api_configured: !settings.part_api_key.is_empty(),
            order_api_configured: !settings.order_api_key.is_empty(),
            timeout_secs: settings.timeout.as_secs(),
        })
    }

    /// Returns the current server state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Runs the MCP server main loop with graceful shutdown handling.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.run_with_shutdown().await
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(unix)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).map_err(std::io::Error::other)?;
        let mut sigterm = signal(SignalKind::terminate()).map_err(std::io::Error::other)?;

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(windows)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Received Ctrl+C, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Handles the result from transport read.
    ///
    /// Returns `true` if the server should shut down.
    async fn handle_transport_result(
        &mut self,
        line_result: std::io::Result<Option<String>>,
    ) -> std::io::Result<bool> {
        let Some(line) = line_result? else {
            self.state = ServerState::ShuttingDown;
            return Ok(true);
        };

        if line.trim().is_empty() {
            return Ok(false);
        }

        self.handle_line(&line).await?;

        if self.state == ServerState::ShuttingDown {
            return Ok(true);
        }

        Ok(false)
    }

    /// Handles a single line of input.
    async fn handle_line(&mut self, line: &str) -> std::io::Result<()> {
        use crate::mcp::protocol::parse_message;

        match parse_message(line) {
            Ok(msg) => self.handle_message(msg).await,
            Err(error) => {
                self.transport.write_error(&error).await?;
                Ok(())
            }
        }
    }

    /// Handles a parsed incoming message.
    async fn handle_message(&mut self, msg: IncomingMessage) -> std::io::Result<()> {
        match msg {
            IncomingMessage::Request(req) => self.handle_request(req).await,
            IncomingMessage::Notification(ref notif) => {
                self.handle_notification(notif);
                Ok(())
            }
        }
    }

    /// Handles an incoming request.
    async fn handle_request(&mut self, req: JsonRpcRequest) -> std::io::Result<()> {
        let response = match req.method.as_str() {
            "initialize" => self.handle_initialize(&req),
            "tools/list" => self.handle_tools_list(&req),
            "tools/call" => self.handle_tools_call(&req).await,
            "resources/list" => self.handle_resources_list(&req),
            "resources/read" => self.handle_resources_read(&req),
            "prompts/list" => self.handle_prompts_list(&req),
            "prompts/get" => self.handle_prompts_get(&req),
            "ping" => Ok(Self::handle_ping(&req)),
            _ => Err(JsonRpcError::method_not_found(req.id.clone(), &req.method)),
        };

        match response {
            Ok(resp) => self.transport.write_response(&resp).await,
            Err(error) => self.transport.write_error(&error).await,
        }
    }

    /// Handles an incoming notification.
    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        if notif.method == "notifications/initialized" && self.state == ServerState::Initialising {
            self.state = ServerState::Running;
            tracing::info!(
                protocol_version = self.protocol_version.as_deref().unwrap_or(MCP_PROTOCOL_VERSION),
                "MCP session initialised"
            );
        }
    }

    /// Handles the initialize request.
    fn handle_initialize(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcError::new(
                Some(req.id.clone()),
                JsonRpcErrorData::with_message(
                    ErrorCode::InvalidRequest,
                    "Server already initialised",
                ),
            ));
        }

        let params: InitializeParams = req
            .params
            .as_ref()
            .map(|p| serde_json::from_value(p.clone()))
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid initialize params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing initialize params")
            })?;

        if let Some(client) = &params.client_info {
            tracing::info!(
                client = %client.name,
                client_version = client.version.as_deref().unwrap_or("unknown"),
                requested_version = %params.protocol_version,
                "Client connected"
            );
        }

        let negotiated_version = MCP_PROTOCOL_VERSION.to_string();

        self.protocol_version = Some(negotiated_version.clone());
        self.state = ServerState::Initialising;

        let result = json!({
            "protocolVersion": negotiated_version,
            "capabilities": ServerCapabilities::default(),
            "serverInfo": ServerInfo::default(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/list request.
    fn handle_tools_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let tools = Self::get_tool_definitions();

        let result = json!({
            "tools": tools,
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/call request.
    async fn handle_tools_call(
        &self,
        req: &JsonRpcRequest,
    ) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: ToolCallParams = req
            .params
            .as_ref()
            .map(|p| serde_json::from_value(p.clone()))
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid tool call params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing tool call params")
            })?;

        let args = &params.arguments;
        let result = match params.name.as_str() {
            // Part Search API
            "search_by_keyword" => self.call_search_by_keyword(args).await,
            "search_by_part_number" => self.call_search_by_part_number(args).await,
            // Cart API
            "get_cart" => self.call_get_cart(args).await,
            "add_to_cart" => self.call_add_to_cart(args).await,
            "update_cart_item" => self.call_update_cart_item(args).await,
            // Order API
            "get_order_options" => self.call_get_order_options(args).await,
            "get_order" => self.call_get_order(args).await,
            "list_order_history" => self.call_list_order_history(args).await,
            // Diagnostics
            "health_check" => self.call_health_check(),
            // Unknown tool
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        let result_value = serde_json::to_value(&result).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialise tool call result");
            JsonRpcError::internal_error(req.id.clone(), "Failed to serialise tool call result")
        })?;

        Ok(JsonRpcResponse::success(req.id.clone(), result_value))
    }

    /// Handles the resources/list request.
    fn handle_resources_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let result = json!({
            "resources": [{
                "uri": STATUS_RESOURCE_URI,
                "name": "Server status",
                "description": "Mouser MCP server configuration status (keys redacted)",
                "mimeType": "text/plain",
            }],
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the resources/read request.
    fn handle_resources_read(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let uri = req
            .params
            .as_ref()
            .and_then(|p| p.get("uri"))
            .and_then(Value::as_str)
            .ok_or_else(|| JsonRpcError::invalid_params(req.id.clone(), "Missing resource uri"))?;

        if uri != STATUS_RESOURCE_URI {
            return Err(JsonRpcError::invalid_params(
                req.id.clone(),
                format!("Unknown resource: {uri}"),
            ));
        }

        let result = json!({
            "contents": [{
                "uri": STATUS_RESOURCE_URI,
                "mimeType": "text/plain",
                "text": self.status_text(),
            }],
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the prompts/list request.
    fn handle_prompts_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let result = json!({
            "prompts": [{
                "name": WORKFLOW_PROMPT_NAME,
                "description": "Guide for searching and purchasing electronic components",
            }],
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the prompts/get request.
    fn handle_prompts_get(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let name = req
            .params
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .ok_or_else(|| JsonRpcError::invalid_params(req.id.clone(), "Missing prompt name"))?;

        if name != WORKFLOW_PROMPT_NAME {
            return Err(JsonRpcError::invalid_params(
                req.id.clone(),
                format!("Unknown prompt: {name}"),
            ));
        }

        let result = json!({
            "description": "Guide for searching and purchasing electronic components",
            "messages": [{
                "role": "user",
                "content": {
                    "type": "text",
                    "text": Self::workflow_prompt_text(),
                },
            }],
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the ping request.
    fn handle_ping(req: &JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(req.id.clone(), json!({}))
    }

    /// Ensures the server is in the Running state.
    fn require_running(&self, id: &RequestId) -> Result<(), JsonRpcError> {
        if self.state != ServerState::Running {
            return Err(JsonRpcError::new(
                Some(id.clone()),
                JsonRpcErrorData::with_message(ErrorCode::InvalidRequest, "Server not initialised"),
            ));
        }
        Ok(())
    }

    // === Tool handlers ===

    async fn call_search_by_keyword(&self, arguments: &Value) -> ToolCallResult {
        let Some(keyword) = arguments.get("keyword").and_then(Value::as_str) else {
            return ToolCallResult::error("Missing required parameter: keyword");
        };
        let records = arguments
            .get("records")
            .and_then(Value::as_u64)
            .map_or(MAX_SEARCH_RECORDS, saturate_u32);
        let starting_record = arguments
            .get("starting_record")
            .and_then(Value::as_u64)
            .map_or(0, saturate_u32);

        render_result(
            self.client
                .search_by_keyword(keyword, records, starting_record)
                .await,
        )
    }

    async fn call_search_by_part_number(&self, arguments: &Value) -> ToolCallResult {
        let Some(part_number) = arguments.get("part_number").and_then(Value::as_str) else {
            return ToolCallResult::error("Missing required parameter: part_number");
        };

        render_result(self.client.search_by_part_number(part_number).await)
    }

    async fn call_get_cart(&self, arguments: &Value) -> ToolCallResult {
        let Some(cart_key) = arguments.get("cart_key").and_then(Value::as_str) else {
            return ToolCallResult::error("Missing required parameter: cart_key");
        };

        render_result(self.client.get_cart(cart_key).await)
    }

    async fn call_add_to_cart(&self, arguments: &Value) -> ToolCallResult {
        let Some(cart_key) = arguments.get("cart_key").and_then(Value::as_str) else {
            return ToolCallResult::error("Missing required parameter: cart_key");
        };
        let Some(part_number) = arguments.get("mouser_part_number").and_then(Value::as_str) else {
            return ToolCallResult::error("Missing required parameter: mouser_part_number");
        };
        let Some(quantity) = arguments.get("quantity").and_then(Value::as_u64) else {
            return ToolCallResult::error("Missing required parameter: quantity");
        };
        let customer_part_number = arguments.get("customer_part_number").and_then(Value::as_str);

        render_result(
            self.client
                .add_to_cart(cart_key, part_number, saturate_u32(quantity), customer_part_number)
                .await,
        )
    }

    async fn call_update_cart_item(&self, arguments: &Value) -> ToolCallResult {
        let Some(cart_key) = arguments.get("cart_key").and_then(Value::as_str) else {
            return ToolCallResult::error("Missing required parameter: cart_key");
        };
        let Some(part_number) = arguments.get("mouser_part_number").and_then(Value::as_str) else {
            return ToolCallResult::error("Missing required parameter: mouser_part_number");
        };
        let Some(quantity) = arguments.get("quantity").and_then(Value::as_u64) else {
            return ToolCallResult::error("Missing required parameter: quantity");
        };

        render_result(
            self.client
                .update_cart_item(cart_key, part_number, saturate_u32(quantity))
                .await,
        )
    }

    async fn call_get_order_options(&self, arguments: &Value) -> ToolCallResult {
        let Some(cart_key) = arguments.get("cart_key").and_then(Value::as_str) else {
            return ToolCallResult::error("Missing required parameter: cart_key");
        };

        render_result(self.client.get_order_options(cart_key).await)
    }

    async fn call_get_order(&self, arguments: &Value) -> ToolCallResult {
        let Some(order_number) = arguments.get("order_number").and_then(Value::as_str) else {
            return ToolCallResult::error("Missing required parameter: order_number");
        };

        render_result(self.client.get_order(order_number).await)
    }

    async fn call_list_order_history(&self, arguments: &Value) -> ToolCallResult {
        let days = arguments
            .get("days")
            .and_then(Value::as_u64)
            .map_or(30, saturate_u32);

        render_result(self.client.list_order_history(days).await)
    }

    fn call_health_check(&self) -> ToolCallResult {
        let result = json!({
            "status": "healthy",
            "server": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "part_api_configured": self.part_api_configured,
            "order_api_configured": self.order_api_configured,
            "base_url": self.client.base_url().as_str(),
        });
        ToolCallResult::text(serde_json::to_string_pretty(&result).unwrap())
    }

    /// Renders the configuration-status resource (keys never included).
    fn status_text(&self) -> String {
        format!(
            "Mouser MCP Server Status:\n\
             - Base URL: {}\n\
             - Part Search API Key: {}\n\
             - Order API Key: {}\n\
             - Timeout: {}s\n",
            self.client.base_url(),
            configured_label(self.part_api_configured),
            configured_label(self.order_api_configured),
            self.timeout_secs,
        )
    }

    fn workflow_prompt_text() -> &'static str {
        "To search for and purchase electronic components from Mouser:\n\
         \n\
         1. Search for components:\n\
            - Use search_by_keyword for general searches (e.g., \"resistor 10k\", \"STM32F4\")\n\
            - Use search_by_part_number for exact part lookups (e.g., \"595-TPS54360DDAR\")\n\
         \n\
         2. Review results:\n\
            - Check MouserPartNumber, ManufacturerPartNumber, and Description\n\
            - Review Availability and LeadTime\n\
            - Check PriceBreaks for quantity pricing\n\
            - Access DataSheetUrl for specifications\n\
            - Verify ROHSStatus and LifecycleStatus\n\
         \n\
         3. Add to cart (optional):\n\
            - Use add_to_cart with your cart key, part number, and quantity\n\
            - Use update_cart_item to modify quantities (0 removes the item)\n\
            - Use get_cart to review cart contents\n\
         \n\
         4. Order management:\n\
            - Use get_order_options to see shipping/payment options\n\
            - Use get_order to track order status\n\
            - Use list_order_history to view past orders\n\
         \n\
         Rate limits: 50 results per search, 30 calls/minute, 1000 calls/day."
    }

    /// Returns the list of available tools.
    #[allow(clippy::too_many_lines)]
    fn get_tool_definitions() -> Vec<ToolDefinition> {
        vec![
            // === Part Search API ===
            ToolDefinition {
                name: "search_by_keyword".to_string(),
                description: Some(
                    "Search for electronic components by keyword across part numbers, \
                     manufacturers, and descriptions. Returns up to 50 results per request \
                     with pricing, availability, datasheets, and specifications. \
                     Rate limits: 30 requests/minute, 1000/day."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "keyword": {
                            "type": "string",
                            "description": "Search term (part number, manufacturer, description, etc.)"
                        },
                        "records": {
                            "type": "integer",
                            "minimum": 1,
                            "maximum": 50,
                            "description": "Number of records to return (max 50, default 50)"
                        },
                        "starting_record": {
                            "type": "integer",
                            "minimum": 0,
                            "description": "Starting record number for pagination (default 0)"
                        }
                    },
                    "required": ["keyword"]
                }),
            },
            ToolDefinition {
                name: "search_by_part_number".to_string(),
                description: Some(
                    "Search for a specific part by exact Mouser or manufacturer part number. \
                     Returns detailed part information including pricing tiers, availability, \
                     datasheets, and specifications."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "part_number": {
                            "type": "string",
                            "description": "Exact Mouser or manufacturer part number"
                        }
                    },
                    "required": ["part_number"]
                }),
            },
            // === Cart API ===
            ToolDefinition {
                name: "get_cart".to_string(),
                description: Some(
                    "Retrieve shopping cart contents by cart key, including all items, \
                     quantities, pricing, and totals."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "cart_key": {
                            "type": "string",
                            "description": "Unique cart identifier (UUID format)"
                        }
                    },
                    "required": ["cart_key"]
                }),
            },
            ToolDefinition {
                name: "add_to_cart".to_string(),
                description: Some(
                    "Add an item to an existing shopping cart. If the part is already in \
                     the cart, its quantity is updated."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "cart_key": {
                            "type": "string",
                            "description": "Unique cart identifier (UUID format)"
                        },
                        "mouser_part_number": {
                            "type": "string",
                            "description": "Mouser part number to add"
                        },
                        "quantity": {
                            "type": "integer",
                            "minimum": 1,
                            "description": "Quantity to add"
                        },
                        "customer_part_number": {
                            "type": "string",
                            "description": "Optional customer reference number"
                        }
                    },
                    "required": ["cart_key", "mouser_part_number", "quantity"]
                }),
            },
            ToolDefinition {
                name: "update_cart_item".to_string(),
                description: Some(
                    "Update the quantity of an item in the cart. Set quantity to 0 to \
                     remove the item."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "cart_key": {
                            "type": "string",
                            "description": "Unique cart identifier"
                        },
                        "mouser_part_number": {
                            "type": "string",
                            "description": "Mouser part number to update"
                        },
                        "quantity": {
                            "type": "integer",
                            "minimum": 0,
                            "description": "New quantity (0 to remove item)"
                        }
                    },
                    "required": ["cart_key", "mouser_part_number", "quantity"]
                }),
            },
            // === Order API ===
            ToolDefinition {
                name: "get_order_options".to_string(),
                description: Some(
                    "Get available order options for a cart: billing/shipping addresses, \
                     payment methods, shipping options, and currency."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "cart_key": {
                            "type": "string",
                            "description": "Cart key to get order options for"
                        }
                    },
                    "required": ["cart_key"]
                }),
            },
            ToolDefinition {
                name: "get_order".to_string(),
                description: Some(
                    "Get order details by order number: status, items, totals, shipping \
                     details, and tracking information."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "order_number": {
                            "type": "string",
                            "description": "Mouser order number or web order number"
                        }
                    },
                    "required": ["order_number"]
                }),
            },
            ToolDefinition {
                name: "list_order_history".to_string(),
                description: Some(
                    "List order history for the past N days: order numbers, dates, \
                     statuses, and totals."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "days": {
                            "type": "integer",
                            "minimum": 1,
                            "description": "Number of days to look back (default 30)"
                        }
                    }
                }),
            },
            // === Diagnostics ===
            ToolDefinition {
                name: "health_check".to_string(),
                description: Some(
                    "Check the health status of the Mouser MCP server and its API \
                     configuration. Never returns key material."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {}
                }),
            },
        ]
    }
}

/// Clamps a JSON integer into `u32` range; out-of-range values are left
/// to the domain-level validation to reject.
fn saturate_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

const fn configured_label(configured: bool) -> &'static str {
    if configured {
        "configured"
    } else {
        "missing"
    }
}

/// Renders a domain operation result as tool content.
///
/// Success payloads pass through verbatim as pretty-printed JSON. Errors
/// keep their taxonomy visible so the caller can tell a local validation
/// failure from an upstream rejection from a transport fault.
fn render_result(result: ApiResult<Value>) -> ToolCallResult {
    match result {
        Ok(payload) => ToolCallResult::text(serde_json::to_string_pretty(&payload).unwrap()),
        Err(ApiError::Upstream { ref errors }) => {
            let body = json!({
                "status": "error",
                "kind": "upstream_validation",
                "errors": errors,
            });
            ToolCallResult::error(serde_json::to_string_pretty(&body).unwrap())
        }
        Err(error @ ApiError::InvalidParameter { .. }) => {
            let body = json!({
                "status": "error",
                "kind": "invalid_parameter",
                "message": error.to_string(),
            });
            ToolCallResult::error(serde_json::to_string_pretty(&body).unwrap())
        }
        Err(error) => {
            let body = json!({
                "status": "error",
                "kind": "transport",
                "message": error.to_string(),
            });
            ToolCallResult::error(serde_json::to_string_pretty(&body).unwrap())
        }
    }
}
