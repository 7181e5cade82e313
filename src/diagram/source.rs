// SPDX-License-Identifier: MPL-2.0
//! Built-in example diagrams.
//!
//! Six curated Mermaid sources covering the common diagram families. The
//! texts are the canonical examples from the Mermaid documentation, kept
//! verbatim so they render identically on every service version.

/// A built-in example diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    /// Stable identifier, persisted in the session state.
    pub id: &'static str,
    /// i18n key for the display name.
    pub name_key: &'static str,
    /// Mermaid source text.
    pub source: &'static str,
}

/// All built-in examples, in picker order.
pub static EXAMPLES: [Example; 6] = [
    Example {
        id: "flowchart",
        name_key: "example-flowchart",
        source: r#"graph TD;
    A["Start"] --> B["Process"];
    B --> C["Decision"];
    C -->|"Yes"| D["Action 1"];
    C -->|"No"| E["Action 2"];
    D --> F["End"];
    E --> F;"#,
    },
    Example {
        id: "sequence",
        name_key: "example-sequence",
        source: r"sequenceDiagram
    participant Alice
    participant Bob
    Alice->>John: Hello John, how are you?
    loop Healthcheck
        John->>John: Fight against hypochondria
    end
    Note right of John: Rational thoughts <br/>prevail!
    John-->>Alice: Great!
    John->>Bob: How about you?
    Bob-->>John: Jolly good!",
    },
    Example {
        id: "class",
        name_key: "example-class",
        source: r"classDiagram
    Animal <|-- Duck
    Animal <|-- Fish
    Animal <|-- Zebra
    Animal : +int age
    Animal : +String gender
    Animal: +isMammal()
    Animal: +mate()
    class Duck{
        +String beakColor
        +swim()
        +quack()
    }
    class Fish{
        -int sizeInFeet
        -canEat()
    }
    class Zebra{
        +bool is_wild
        +run()
    }",
    },
    Example {
        id: "gantt",
        name_key: "example-gantt",
        source: r"gantt
    title A Gantt Diagram
    dateFormat  YYYY-MM-DD
    section Section
    A task           :a1, 2023-01-01, 30d
    Another task     :after a1, 20d
    section Another
    Task in sec      :2023-01-12, 12d
    another task     :24d",
    },
    Example {
        id: "er",
        name_key: "example-er",
        source: r"erDiagram
    CUSTOMER ||--o{ ORDER : places
    ORDER ||--|{ LINE-ITEM : contains
    CUSTOMER }|..|{ DELIVERY-ADDRESS : uses",
    },
    Example {
        id: "complex",
        name_key: "example-complex",
        source: r#"graph TB
    subgraph "Frontend"
        A[React App] --> B[Component Library]
        A --> C[State Management]
        B --> D[UI Components]
        C --> E[Redux Store]
    end

    subgraph "Backend"
        F[API Gateway] --> G[Microservices]
        G --> H[User Service]
        G --> I[Order Service]
        G --> J[Payment Service]
    end

    subgraph "Database"
        K[(User DB)] --> H
        L[(Order DB)] --> I
        M[(Payment DB)] --> J
    end

    A --> F

    style A fill:#e1f5fe
    style F fill:#f3e5f5
    style K fill:#e8f5e8
    style L fill:#e8f5e8
    style M fill:#e8f5e8"#,
    },
];

/// The example loaded when no session state or share link provides a source.
#[must_use]
pub fn default_example() -> &'static Example {
    &EXAMPLES[0]
}

/// Looks up an example by its stable identifier.
#[must_use]
pub fn find(id: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|example| example.id == id)
}
