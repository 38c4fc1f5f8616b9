//! README rendering.
//!
//! Turns a [`ModuleInfo`] into Markdown by composing fixed section templates. Which sections
//! appear depends only on what extraction found, and the output is a pure function of the
//! module info, the render options and the timestamp passed in.

use crate::extractor::{EndpointDescriptor, HttpMethod};
use crate::module::ModuleInfo;
use chrono::{Local, NaiveDateTime};
use log::debug;

/// Base URL used in example requests unless overridden.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable the generated notes tell readers to set.
pub const API_KEY_ENV: &str = "AI_DASHSCOPE_API_KEY";

/// Keyword in a controller name (lower-cased) to the feature phrase it contributes to the
/// module description. First match wins.
pub const MODULE_KEYWORDS: &[(&str, &str)] = &[
    ("chat", "AI对话"),
    ("time", "时间工具"),
    ("search", "搜索功能"),
    ("image", "图像处理"),
    ("rag", "RAG增强"),
    ("advisor", "对话增强"),
    ("stream", "流式处理"),
    ("parallel", "并行处理"),
    ("vector", "向量数据库"),
];

/// Keyword in a handler name (lower-cased) to its usage-scenario bullets. First match wins.
pub const USAGE_SCENARIOS: &[(&str, &[&str])] = &[
    ("chat", &["AI 对话交互", "智能问答系统"]),
    ("time", &["时间相关查询", "工具调用示例"]),
    ("search", &["信息检索", "知识查询"]),
];

const DEFAULT_SCENARIOS: &[&str] = &["数据处理和响应"];

const MAX_LISTED_DEPENDENCIES: usize = 5;
const MAX_CURL_CONTROLLERS: usize = 2;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Knobs that change rendered text without touching extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix of every example URL
    pub base_url: String,
    /// Show each endpoint's declared verb instead of always `GET`
    pub declared_methods: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            declared_methods: false,
        }
    }
}

/// Markdown README renderer.
///
/// # Example
///
/// ```
/// use readme_from_source::module::ModuleInfo;
/// use readme_from_source::renderer::{ReadmeRenderer, RenderOptions};
///
/// let info = ModuleInfo { name: "chat".to_string(), ..Default::default() };
/// let readme = ReadmeRenderer::new(RenderOptions::default()).render_now(&info);
/// assert!(readme.starts_with("# Chat 模块"));
/// ```
pub struct ReadmeRenderer {
    options: RenderOptions,
}

impl ReadmeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders with the current local time in the footer.
    pub fn render_now(&self, info: &ModuleInfo) -> String {
        self.render(info, Local::now().naive_local())
    }

    /// Renders the complete README, stamping `generated_at` into the footer.
    pub fn render(&self, info: &ModuleInfo, generated_at: NaiveDateTime) -> String {
        debug!(
            "Rendering README for {} ({} controllers)",
            info.name,
            info.controllers.len()
        );

        let mut content = format!("# {} 模块\n\n", title_case(&info.name));

        content.push_str("## 模块说明\n\n");
        content.push_str(&format!("{}。\n\n", module_description(info)));

        if info.has_endpoints() {
            self.render_api_docs(info, &mut content);
        }
        render_technical(info, &mut content);
        self.render_testing(info, &mut content);
        render_notes(&mut content);

        content.push_str("---\n\n");
        content.push_str(&format!(
            "*此 README.md 由自动化工具生成于 {}*\n",
            generated_at.format(TIMESTAMP_FORMAT)
        ));

        content
    }

    fn render_api_docs(&self, info: &ModuleInfo, content: &mut String) {
        content.push_str("## 接口文档\n\n");

        for controller in info.controllers.iter().filter(|c| !c.endpoints.is_empty()) {
            content.push_str(&format!("### {} 接口\n\n", controller.display_name));

            for (i, endpoint) in controller.endpoints.iter().enumerate() {
                self.render_endpoint(i + 1, endpoint, content);
            }

            content.push('\n');
        }
    }

    fn render_endpoint(&self, number: usize, endpoint: &EndpointDescriptor, content: &mut String) {
        let verb = self.verb(endpoint);

        content.push_str(&format!("#### {}. {} 方法\n\n", number, endpoint.handler_name));
        content.push_str(&format!("**接口路径：** `{} {}`\n\n", verb, endpoint.path));

        if endpoint.doc_summary.is_empty() {
            content.push_str(&format!(
                "**功能描述：** 提供 {} 相关功能\n\n",
                endpoint.handler_name
            ));
        } else {
            content.push_str(&format!("**功能描述：** {}\n\n", endpoint.doc_summary));
        }

        content.push_str("**主要特性：**\n");
        content.push_str("- 基于 Spring Boot REST API 实现\n");
        if !endpoint.parameters.is_empty() {
            content.push_str("- 支持自定义查询参数\n");
        }
        content.push_str("- 返回 JSON 格式响应\n");
        content.push_str("- 支持 UTF-8 编码\n\n");

        content.push_str("**使用场景：**\n");
        for scenario in usage_scenarios(&endpoint.handler_name) {
            content.push_str(&format!("- {}\n", scenario));
        }
        content.push_str("- API 集成测试\n\n");

        content.push_str("**示例请求：**\n");
        content.push_str("```bash\n");
        content.push_str(&format!("{} {}\n", verb, self.example_url(endpoint)));
        content.push_str("```\n\n");
    }

    fn render_testing(&self, info: &ModuleInfo, content: &mut String) {
        content.push_str("\n## 测试指导\n\n");

        if let Some(http_file) = &info.http_file {
            content.push_str("### 使用 HTTP 文件测试\n");
            content.push_str(&format!(
                "模块根目录下提供了 **[{0}](./{0})** 文件，包含所有接口的测试用例：\n",
                http_file
            ));
            content.push_str("- 可在 IDE 中直接执行\n");
            content.push_str("- 支持参数自定义\n");
            content.push_str("- 提供默认示例参数\n\n");
        }

        if !info.controllers.is_empty() {
            content.push_str("### 使用 curl 测试\n");
            for controller in info.controllers.iter().take(MAX_CURL_CONTROLLERS) {
                if let Some(endpoint) = controller.endpoints.first() {
                    content.push_str(&format!(
                        "```bash\n# {} 接口测试\n{}\n```\n\n",
                        endpoint.handler_name,
                        self.curl_command(endpoint)
                    ));
                }
            }
        }
    }

    fn verb(&self, endpoint: &EndpointDescriptor) -> HttpMethod {
        if self.options.declared_methods {
            endpoint.method
        } else {
            HttpMethod::Get
        }
    }

    fn curl_command(&self, endpoint: &EndpointDescriptor) -> String {
        match self.verb(endpoint) {
            HttpMethod::Get => format!("curl \"{}\"", self.example_url(endpoint)),
            verb => format!("curl -X {} \"{}\"", verb, self.example_url(endpoint)),
        }
    }

    /// Base URL, path and `&`-joined `name=default` query pairs.
    fn example_url(&self, endpoint: &EndpointDescriptor) -> String {
        let mut url = format!("{}{}", self.options.base_url, endpoint.path);
        if !endpoint.parameters.is_empty() {
            let query: Vec<String> = endpoint
                .parameters
                .iter()
                .map(|p| format!("{}={}", p.name, p.default_value))
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }
        url
    }
}

fn render_technical(info: &ModuleInfo, content: &mut String) {
    content.push_str("## 技术实现\n\n");
    content.push_str("### 核心组件\n");
    content.push_str("- **Spring Boot**: 应用框架\n");
    content.push_str("- **Spring AI Alibaba**: AI 功能集成\n");

    if !info.controllers.is_empty() {
        content.push_str("- **REST Controller**: HTTP 接口处理\n");
    }

    for dependency in info.manifest.dependencies.iter().take(MAX_LISTED_DEPENDENCIES) {
        content.push_str(&format!("- **{}**: 核心依赖\n", dependency));
    }

    content.push_str("\n### 配置要点\n");
    content.push_str(&format!("- 需要配置 `{}` 环境变量\n", API_KEY_ENV));
    content.push_str("- 默认端口：8080\n");
    if !info.controllers.is_empty() {
        content.push_str("- 默认上下文路径：/basic\n");
    }
}

fn render_notes(content: &mut String) {
    content.push_str("## 注意事项\n\n");
    content.push_str(&format!(
        "1. **环境变量**: 确保 `{}` 已正确设置\n",
        API_KEY_ENV
    ));
    content.push_str("2. **网络连接**: 需要能够访问阿里云 DashScope 服务\n");
    content.push_str("3. **字符编码**: 所有响应使用 UTF-8 编码，支持中文内容\n");
    content.push_str("4. **端口配置**: 确保端口 8080 未被占用\n\n");
}

/// The module description: the README's own if there is one, else one synthesized from
/// controller names.
pub fn module_description(info: &ModuleInfo) -> String {
    if let Some(description) = info.prior_description.as_deref().filter(|d| !d.is_empty()) {
        return description.to_string();
    }

    if info.controllers.is_empty() {
        return format!("本模块是 {} 模块", info.name);
    }

    let features: Vec<&str> = info
        .controllers
        .iter()
        .filter_map(|controller| lookup(MODULE_KEYWORDS, &controller.display_name))
        .collect();

    if features.is_empty() {
        format!(
            "本模块是 {} 模块，包含 {} 个控制器",
            info.name,
            info.controllers.len()
        )
    } else {
        format!("本模块演示 Spring AI Alibaba 的{}功能", features.join(", "))
    }
}

/// Usage-scenario bullets for a handler, excluding the trailing generic one.
pub fn usage_scenarios(handler_name: &str) -> &'static [&'static str] {
    lookup(USAGE_SCENARIOS, handler_name).unwrap_or(DEFAULT_SCENARIOS)
}

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    let name = name.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| name.contains(*keyword))
        .map(|(_, value)| *value)
}

/// Upper-cases the first letter of each alphabetic run and lower-cases the rest,
/// so `chat-memory` becomes `Chat-Memory`.
pub fn title_case(name: &str) -> String {
    let mut previous_alphabetic = false;
    name.chars()
        .map(|c| {
            let mapped: String = if !c.is_alphabetic() {
                c.to_string()
            } else if previous_alphabetic {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            previous_alphabetic = c.is_alphabetic();
            mapped
        })
        .collect()
}
