use crate::domain::model::{AlignmentPlan, DomainAlignment, HttpMethod, OperationAlignment};
use crate::utils::naming;
use std::fmt::Write;

pub const DEFAULT_SCAFFOLD_DIR: &str = "microservices";
pub const DEFAULT_BASE_PACKAGE: &str = "com.generated";

/// One file of a generated service, path relative to the scaffold root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub contents: String,
}

/// Emits one Spring Boot service skeleton per aligned domain.
#[derive(Debug, Clone)]
pub struct ScaffoldGenerator {
    base_package: String,
}

impl Default for ScaffoldGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PACKAGE)
    }
}

impl ScaffoldGenerator {
    pub fn new(base_package: impl Into<String>) -> Self {
        Self {
            base_package: base_package.into(),
        }
    }

    /// The fallback bucket never gets a service.
    pub fn render(&self, plan: &AlignmentPlan) -> Vec<GeneratedFile> {
        plan.aligned_domains()
            .flat_map(|group| self.render_service(group))
            .collect()
    }

    fn render_service(&self, group: &DomainAlignment) -> Vec<GeneratedFile> {
        let name = &group.domain.name;
        let slug = naming::slug(name);
        let package = naming::package_name(&self.base_package, &slug);
        let class_base = naming::class_name(name);
        let application = format!("{}Application", class_base);
        let controller = format!("{}Controller", class_base);
        let java_dir = format!("{}/src/main/java/{}", slug, package.replace('.', "/"));

        tracing::debug!("Rendering service skeleton {} ({} operations)", slug, group.operations.len());

        vec![
            GeneratedFile {
                path: format!("{}/pom.xml", slug),
                contents: pom(&slug, name),
            },
            GeneratedFile {
                path: format!("{}/{}.java", java_dir, application),
                contents: application_class(&package, &application),
            },
            GeneratedFile {
                path: format!("{}/api/{}.java", java_dir, controller),
                contents: controller_class(&format!("{}.api", package), &controller, &slug, group),
            },
            GeneratedFile {
                path: format!("{}/src/main/resources/application.properties", slug),
                contents: format!("spring.application.name={}\n", slug),
            },
            GeneratedFile {
                path: format!("{}/README.md", slug),
                contents: readme(group),
            },
        ]
    }
}

fn pom(artifact_id: &str, service_name: &str) -> String {
    format!(
        r#"<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>3.3.5</version>
        <relativePath/>
    </parent>
    <groupId>com.generated</groupId>
    <artifactId>{artifact_id}</artifactId>
    <version>0.1.0-SNAPSHOT</version>
    <name>{service_name}</name>
    <properties>
        <java.version>17</java.version>
    </properties>
    <dependencies>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-web</artifactId>
        </dependency>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-actuator</artifactId>
        </dependency>
    </dependencies>
    <build>
        <plugins>
            <plugin>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-maven-plugin</artifactId>
            </plugin>
        </plugins>
    </build>
</project>
"#
    )
}

fn application_class(package: &str, class_name: &str) -> String {
    format!(
        r#"package {package};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class {class_name} {{
    public static void main(String[] args) {{
        SpringApplication.run({class_name}.class, args);
    }}
}}
"#
    )
}

fn controller_class(package: &str, class_name: &str, slug: &str, group: &DomainAlignment) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "package {};\n", package);
    out.push_str("import org.springframework.http.HttpStatus;\n");
    out.push_str("import org.springframework.http.ResponseEntity;\n");
    out.push_str("import org.springframework.web.bind.annotation.*;\n\n");
    out.push_str("@RestController\n");
    let _ = writeln!(out, "@RequestMapping(\"/{}\")", slug);
    let _ = writeln!(out, "public class {} {{\n", class_name);

    for aligned in &group.operations {
        append_endpoint(&mut out, aligned);
    }

    out.push_str("}\n");
    out
}

fn append_endpoint(out: &mut String, aligned: &OperationAlignment) {
    let op = &aligned.operation;
    let _ = writeln!(out, "    {}", mapping_for(op.method(), op.path()));
    let _ = writeln!(
        out,
        "    public ResponseEntity<String> {}() {{",
        naming::method_name(op.operation_id())
    );
    if let Some(summary) = op.summary().filter(|s| !s.trim().is_empty()) {
        let _ = writeln!(out, "        // {}", summary);
    }
    out.push_str("        return ResponseEntity.status(HttpStatus.NOT_IMPLEMENTED)\n");
    let _ = writeln!(
        out,
        "                .body(\"Not yet implemented - align to domain {}\");",
        aligned.domain.name
    );
    out.push_str("    }\n\n");
}

fn mapping_for(method: &HttpMethod, path: &str) -> String {
    match method {
        HttpMethod::Get => format!("@GetMapping(\"{}\")", path),
        HttpMethod::Post => format!("@PostMapping(\"{}\")", path),
        HttpMethod::Put => format!("@PutMapping(\"{}\")", path),
        HttpMethod::Patch => format!("@PatchMapping(\"{}\")", path),
        HttpMethod::Delete => format!("@DeleteMapping(\"{}\")", path),
        HttpMethod::Other(other) => format!(
            "@RequestMapping(method = RequestMethod.{}, value = \"{}\")",
            other, path
        ),
    }
}

fn readme(group: &DomainAlignment) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {} service\n", group.domain.name);
    let _ = writeln!(out, "- Domain: {}", group.domain.code);
    let _ = writeln!(out, "- Operations scaffolded: {}\n", group.operations.len());
    out.push_str("Endpoints\n");
    for aligned in &group.operations {
        let op = &aligned.operation;
        let _ = write!(out, "- {} {}", op.method(), op.path());
        if let Some(summary) = op.summary() {
            let _ = write!(out, " - {}", summary);
        }
        out.push('\n');
    }
    out
}
