//! Built-in description of the HealthVital platform.
//!
//! [`layers`] feeds the architecture diagram; [`project`] feeds the spec
//! export. The two are maintained independently: the diagram uses short
//! display names while the project specification lists full product names.

use healthvital_core::architecture::{
    ArchitectureSpec, FeatureSet, Layer, ModelError, ProjectOverview, ProjectSpec, TechCategory,
    TechSpec,
};

/// Diagram layers, top to bottom.
///
/// # Errors
///
/// Returns [`ModelError`] if a layer color fails to parse.
pub fn layers() -> Result<Vec<Layer>, ModelError> {
    Ok(vec![
        Layer::new(
            "Presentation",
            ["AWS Amplify", "CloudFront", "S3", "Route 53"],
            "#FF6B6B",
        )?,
        Layer::new("API Layer", ["API Gateway", "Cognito", "IAM", "WAF"], "#4ECDC4")?,
        Layer::new(
            "Compute Layer",
            ["Lambda", "Fargate", "Step Func", "EventBridge"],
            "#45B7D1",
        )?,
        Layer::new(
            "Data Layer",
            ["DynamoDB", "RDS Aurora", "S3", "Redshift", "OpenSearch"],
            "#96CEB4",
        )?,
        Layer::new("Integration", ["SQS", "SNS", "Kinesis", "IoT Core"], "#FECA57")?,
        Layer::new(
            "AI/ML Layer",
            ["SageMaker", "Rekognition", "Comprehend", "Forecast"],
            "#FF9FF3",
        )?,
        Layer::new("Monitoring", ["CloudWatch", "X-Ray", "SNS Alerts"], "#54A0FF")?,
    ])
}

/// The full project specification exported to CSV.
pub fn project() -> ProjectSpec {
    ProjectSpec::new(overview(), architecture(), tech(), features())
}

fn overview() -> ProjectOverview {
    ProjectOverview::new(
        "HealthVital - AI-Powered Serverless Health Monitoring Platform",
        "A comprehensive serverless web application for healthcare monitoring using IoT devices, \
         AI/ML analytics, and real-time patient data processing",
    )
    .with_core_features([
        "Real-time IoT health data ingestion",
        "AI-powered health analytics and predictions",
        "Patient dashboard with real-time monitoring",
        "Healthcare provider portal",
        "Automated alerts and notifications",
        "Secure HIPAA-compliant data handling",
        "Multi-device compatibility",
        "Telemedicine integration",
    ])
}

fn architecture() -> ArchitectureSpec {
    ArchitectureSpec::new()
        .with_layer(
            "presentation",
            [
                ("frontend_hosting", "AWS Amplify"),
                ("cdn", "Amazon CloudFront"),
                ("static_assets", "Amazon S3"),
                ("domain_management", "Route 53"),
            ],
        )
        .with_layer(
            "api_layer",
            [
                ("api_gateway", "Amazon API Gateway"),
                ("authentication", "Amazon Cognito"),
                ("authorization", "AWS IAM"),
                ("security", "AWS WAF"),
            ],
        )
        .with_layer(
            "compute_layer",
            [
                ("serverless_functions", "AWS Lambda"),
                ("container_services", "AWS Fargate"),
                ("orchestration", "AWS Step Functions"),
                ("event_processing", "Amazon EventBridge"),
            ],
        )
        .with_layer(
            "data_layer",
            [
                ("primary_database", "Amazon DynamoDB"),
                ("relational_data", "Amazon RDS Aurora Serverless"),
                ("file_storage", "Amazon S3"),
                ("data_warehouse", "Amazon Redshift Serverless"),
                ("search", "Amazon OpenSearch Serverless"),
            ],
        )
        .with_layer(
            "integration_layer",
            [
                ("message_queuing", "Amazon SQS"),
                ("pub_sub", "Amazon SNS"),
                ("streaming", "Amazon Kinesis"),
                ("iot_core", "AWS IoT Core"),
                ("device_management", "AWS IoT Device Management"),
            ],
        )
        .with_layer(
            "ai_ml_layer",
            [
                ("ml_platform", "Amazon SageMaker"),
                ("computer_vision", "Amazon Rekognition"),
                ("natural_language", "Amazon Comprehend"),
                ("forecasting", "Amazon Forecast"),
                ("personalization", "Amazon Personalize"),
            ],
        )
        .with_layer(
            "monitoring_layer",
            [
                ("logging", "Amazon CloudWatch"),
                ("tracing", "AWS X-Ray"),
                ("monitoring", "Amazon CloudWatch Metrics"),
                ("alerting", "Amazon SNS"),
            ],
        )
}

fn tech() -> TechSpec {
    TechSpec::new()
        .with_category(
            TechCategory::new(
                "frontend_technologies",
                "frontend",
                "Frontend technology specification",
            )
            .with_attributes([
                ("framework", "React.js 18 with TypeScript"),
                ("state_management", "Redux Toolkit"),
                ("ui_library", "Material-UI (MUI) v5"),
                ("charts_visualization", "Chart.js / D3.js"),
                ("real_time_updates", "WebSocket / Server-Sent Events"),
                ("pwa_features", "Service Workers for offline capability"),
                ("testing", "Jest + React Testing Library"),
            ]),
        )
        .with_category(
            TechCategory::new(
                "backend_technologies",
                "backend",
                "Backend technology specification",
            )
            .with_attributes([
                ("runtime", "Node.js 18.x / Python 3.11"),
                ("frameworks", "Express.js (Node.js) / FastAPI (Python)"),
                ("orm", "Prisma (Node.js) / SQLAlchemy (Python)"),
                ("validation", "Joi / Zod (Node.js) / Pydantic (Python)"),
                ("authentication", "JWT tokens with AWS Cognito"),
                ("api_documentation", "OpenAPI 3.0 / Swagger"),
            ]),
        )
        .with_category(
            TechCategory::new("database_design", "database", "Database design specification")
                .with_attributes([
                    ("patient_data", "DynamoDB (NoSQL for flexible health records)"),
                    ("device_data", "DynamoDB Streams for real-time processing"),
                    ("user_management", "Cognito User Pools"),
                    ("analytics_data", "Redshift for historical analysis"),
                    ("file_storage", "S3 with lifecycle policies"),
                ])
                .reference_only(),
        )
}

fn features() -> FeatureSet {
    FeatureSet::new()
        .with_category(
            "ai_powered_insights",
            [
                "Predictive health analytics using ML models",
                "Anomaly detection in vital signs",
                "Personalized health recommendations",
                "Risk assessment algorithms",
            ],
        )
        .with_category(
            "iot_integration",
            [
                "Multiple IoT device compatibility",
                "Real-time data streaming from wearables",
                "Edge computing for device data preprocessing",
                "Device fleet management",
            ],
        )
        .with_category(
            "healthcare_compliance",
            [
                "HIPAA compliance implementation",
                "End-to-end encryption",
                "Audit trails and logging",
                "Data anonymization techniques",
            ],
        )
        .with_category(
            "advanced_features",
            [
                "Multi-tenant architecture for different healthcare providers",
                "Real-time collaboration tools for healthcare teams",
                "Integration with Electronic Health Records (EHR) systems",
                "Telemedicine video calling integration",
                "Mobile app with offline capabilities",
            ],
        )
}
