use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use readme_from_source::{
    extractor::{controller::ControllerExtractor, HttpMethod, Parameter},
    module::ModuleAnalyzer,
    renderer::{ReadmeRenderer, RenderOptions},
};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const JAVA_DIR: &str = "src/main/java/com/alibaba/cloud/ai/example";

/// Helper function to create a temporary module named `name`
fn create_test_module(name: &str, files: Vec<(&str, &str)>) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for (path, content) in files {
        let file_path = temp_dir.path().join(name).join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
    }
    fs::create_dir_all(temp_dir.path().join(name)).expect("Failed to create module directory");

    temp_dir
}

fn demo_module() -> TempDir {
    create_test_module(
        "demo",
        vec![
            (
                &format!("{}/ChatController.java", JAVA_DIR),
                include_str!("fixtures/ChatController.java"),
            ),
            (
                &format!("{}/TimeController.java", JAVA_DIR),
                include_str!("fixtures/TimeController.java"),
            ),
            (
                &format!("{}/LegacyController.java", JAVA_DIR),
                include_str!("fixtures/LegacyController.java"),
            ),
            (
                &format!("{}/DemoApplication.java", JAVA_DIR),
                "@SpringBootApplication\npublic class DemoApplication {}\n",
            ),
            ("src/main/resources/application.yml", "server:\n  port: 8080\n"),
            ("pom.xml", include_str!("fixtures/pom.xml")),
            ("demo.http", "GET http://localhost:8080/api/time\n"),
        ],
    )
}

fn render_frozen(info: &readme_from_source::module::ModuleInfo) -> String {
    let generated_at = NaiveDate::from_ymd_opt(2025, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    ReadmeRenderer::new(RenderOptions::default()).render(info, generated_at)
}

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_readme-from-source"))
}

#[test]
fn test_end_to_end_extraction() {
    let temp_dir = demo_module();
    let info = ModuleAnalyzer::analyze(&temp_dir.path().join("demo")).expect("Failed to analyze module");

    assert_eq!(info.name, "demo");
    assert_eq!(info.main_class.as_deref(), Some("DemoApplication"));
    assert_eq!(info.http_file.as_deref(), Some("demo.http"));
    assert_eq!(info.config_files.len(), 1);

    // LegacyController has no controller marker and is left out entirely
    let names: Vec<_> = info.controllers.iter().map(|c| c.display_name.as_str()).collect();
    assert_eq!(names, vec!["ChatController", "TimeController"]);

    let chat = &info.controllers[0];
    assert_eq!(chat.base_path, "/chat");
    assert_eq!(chat.endpoints.len(), 2, "orphan mapping must be dropped");
    assert_eq!(chat.endpoints[0].handler_name, "simpleChat");
    assert_eq!(chat.endpoints[0].path, "/chat/simple");
    assert_eq!(chat.endpoints[0].doc_summary, "简单对话");
    assert_eq!(chat.endpoints[0].parameters, vec![Parameter::new("query", "你好")]);
    assert_eq!(chat.endpoints[1].handler_name, "streamChat");
    assert_eq!(chat.endpoints[1].doc_summary, "流式对话");

    let time = &info.controllers[1];
    assert_eq!(time.endpoints.len(), 1);
    assert_eq!(time.endpoints[0].handler_name, "getTime");
    assert_eq!(time.endpoints[0].path, "/api/time");
    assert_eq!(time.endpoints[0].method, HttpMethod::Get);
    assert_eq!(time.endpoints[0].doc_summary, "");
    assert!(time.endpoints[0].parameters.is_empty());

    assert_eq!(info.manifest.artifact_id.as_deref(), Some("demo"));
    assert_eq!(
        info.manifest.dependencies,
        vec![
            "spring-boot-starter-web",
            "spring-ai-alibaba-starter-dashscope",
            "spring-boot-starter-webflux",
        ]
    );
}

#[test]
fn test_end_to_end_rendering() {
    let temp_dir = demo_module();
    let info = ModuleAnalyzer::analyze(&temp_dir.path().join("demo")).unwrap();

    let readme = render_frozen(&info);

    assert!(readme.starts_with("# Demo 模块\n\n## 模块说明\n\n本模块演示 Spring AI Alibaba 的AI对话, 时间工具功能。\n"));
    assert!(readme.contains("### ChatController 接口"));
    assert!(readme.contains("**接口路径：** `GET /chat/simple`"));
    assert!(readme.contains("GET http://localhost:8080/chat/simple?query=你好"));
    assert!(readme.contains("**功能描述：** 提供 getTime 相关功能"));
    assert!(readme.contains("- **spring-ai-alibaba-starter-dashscope**: 核心依赖"));
    assert!(readme.contains("**[demo.http](./demo.http)**"));
    assert!(readme.contains("# simpleChat 接口测试\ncurl \"http://localhost:8080/chat/simple?query=你好\""));
    assert!(readme.contains("# getTime 接口测试\ncurl \"http://localhost:8080/api/time\""));
    assert!(!readme.contains("streamChat 接口测试"));
    assert!(readme.ends_with("*此 README.md 由自动化工具生成于 2025-01-02 03:04:05*\n"));
}

#[test]
fn test_rendering_is_deterministic() {
    let temp_dir = demo_module();
    let root = temp_dir.path().join("demo");

    let first = render_frozen(&ModuleAnalyzer::analyze(&root).unwrap());
    let second = render_frozen(&ModuleAnalyzer::analyze(&root).unwrap());

    assert_eq!(first, second);
}

#[test]
fn test_module_without_controllers() {
    let temp_dir = create_test_module("plain", vec![("src/Util.java", "public class Util {}\n")]);
    let info = ModuleAnalyzer::analyze(&temp_dir.path().join("plain")).unwrap();

    let readme = render_frozen(&info);

    assert!(!readme.contains("## 接口文档"));
    assert!(readme.contains("本模块是 plain 模块。"));
    assert!(readme.contains("### 核心组件\n- **Spring Boot**: 应用框架\n- **Spring AI Alibaba**: AI 功能集成\n\n"));
}

#[test]
fn test_marker_removed_yields_no_record() {
    let with_marker = include_str!("fixtures/TimeController.java");
    let without_marker = with_marker
        .replace("@RestController\n", "")
        .replace("@RequestMapping(\"/api\")\n", "");

    assert!(ControllerExtractor::extract_from("TimeController", with_marker).is_some());
    assert!(ControllerExtractor::extract_from("TimeController", &without_marker).is_none());
}

#[test]
fn test_binary_writes_to_output_argument() {
    let temp_dir = demo_module();
    let root = temp_dir.path().join("demo");
    let output = temp_dir.path().join("custom_README.md");

    let status = binary()
        .arg(&root)
        .arg(&output)
        .status()
        .expect("Failed to run binary");

    assert!(status.success());
    assert!(output.exists());
    assert!(!root.join("README.md").exists());
    assert!(fs::read_to_string(&output).unwrap().contains("## 接口文档"));
}

#[test]
fn test_binary_defaults_to_module_readme() {
    let temp_dir = demo_module();
    let root = temp_dir.path().join("demo");

    let output = binary().arg(&root).output().expect("Failed to run binary");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("README.md generated successfully"));
    assert!(root.join("README.md").exists());
}

#[test]
fn test_binary_missing_module_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    let output_path = temp_dir.path().join("out.md");

    let status = binary()
        .arg(&missing)
        .arg(&output_path)
        .status()
        .expect("Failed to run binary");

    assert_eq!(status.code(), Some(1));
    assert!(!output_path.exists());
    assert!(!missing.exists());
}

#[test]
fn test_binary_unwritable_output_exits_with_one() {
    let temp_dir = demo_module();
    let root = temp_dir.path().join("demo");
    let output_dir = temp_dir.path().join("taken");
    fs::create_dir(&output_dir).unwrap();

    let output = binary()
        .arg(&root)
        .arg(&output_dir)
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("generated successfully"));
    assert!(output_dir.is_dir());
    assert!(!root.join("README.md").exists());
}

#[test]
fn test_binary_honours_rust_log() {
    let temp_dir = demo_module();
    let root = temp_dir.path().join("demo");

    let quiet = binary()
        .arg(&root)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run binary");
    let default = binary()
        .arg(&root)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run binary");

    assert!(quiet.status.success());
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("README generator starting"));
    assert!(default.status.success());
    assert!(String::from_utf8_lossy(&default.stderr).contains("README generator starting"));
}

#[test]
fn test_binary_without_arguments_prints_usage() {
    let output = binary().output().expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: readme-from-source"));
}

#[test]
fn test_binary_json_dump() {
    let temp_dir = demo_module();
    let root = temp_dir.path().join("demo");

    let output = binary()
        .arg(&root)
        .args(["-f", "json"])
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["manifest"]["artifact_id"], "demo");
    assert_eq!(value["controllers"][1]["endpoints"][0]["path"], "/api/time");
    assert!(!root.join("README.md").exists());
}
