// src/skills.rs
//! Canonical skill vocabulary and the normalizer that maps free-text skill
//! tokens onto it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::utils::title_case;

/// Alias -> canonical display name. Keys are lowercase; lookups happen on the
/// lowercased, trimmed token.
static SKILL_SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    SYNONYM_PAIRS.iter().copied().collect()
});

const SYNONYM_PAIRS: &[(&str, &str)] = &[
    // Programming languages
    ("js", "JavaScript"),
    ("javascript", "JavaScript"),
    ("ts", "TypeScript"),
    ("typescript", "TypeScript"),
    ("py", "Python"),
    ("python3", "Python"),
    ("python", "Python"),
    ("java", "Java"),
    ("c#", "C#"),
    ("csharp", "C#"),
    ("c++", "C++"),
    ("cpp", "C++"),
    ("go", "Go"),
    ("golang", "Go"),
    ("rb", "Ruby"),
    ("ruby", "Ruby"),
    ("php", "PHP"),
    ("swift", "Swift"),
    ("kotlin", "Kotlin"),
    ("scala", "Scala"),
    ("perl", "Perl"),
    ("rust", "Rust"),
    ("r", "R"),
    ("matlab", "MATLAB"),
    // Cloud platforms
    ("aws", "Amazon Web Services"),
    ("amazon web services", "Amazon Web Services"),
    ("azure", "Microsoft Azure"),
    ("gcp", "Google Cloud Platform"),
    ("google cloud", "Google Cloud Platform"),
    ("oci", "Oracle Cloud Infrastructure"),
    // Containers and orchestration
    ("k8s", "Kubernetes"),
    ("kubernetes", "Kubernetes"),
    ("docker", "Docker"),
    ("containerization", "Docker"),
    // Databases
    ("sql", "SQL"),
    ("mysql", "MySQL"),
    ("postgresql", "PostgreSQL"),
    ("postgres", "PostgreSQL"),
    ("mongo", "MongoDB"),
    ("mongodb", "MongoDB"),
    ("redis", "Redis"),
    ("oracle", "Oracle"),
    ("sqlite", "SQLite"),
    ("cassandra", "Cassandra"),
    ("dynamodb", "DynamoDB"),
    ("hdfs", "Hadoop Distributed File System"),
    ("hive", "Hive"),
    ("elasticsearch", "Elasticsearch"),
    // Big data / data engineering
    ("spark", "Apache Spark"),
    ("hadoop", "Hadoop"),
    ("flink", "Apache Flink"),
    ("kafka", "Apache Kafka"),
    ("airflow", "Apache Airflow"),
    // DevOps / CI-CD
    ("ci/cd", "Continuous Integration / Continuous Deployment"),
    ("ci", "Continuous Integration"),
    ("cd", "Continuous Deployment"),
    ("jenkins", "Jenkins"),
    ("circleci", "CircleCI"),
    ("travis", "Travis CI"),
    ("travis ci", "Travis CI"),
    ("gitlab ci", "GitLab CI"),
    ("github actions", "GitHub Actions"),
    ("terraform", "Terraform"),
    ("ansible", "Ansible"),
    ("puppet", "Puppet"),
    ("chef", "Chef"),
    // Web / frontend frameworks
    ("react", "React"),
    ("reactjs", "React"),
    ("angular", "Angular"),
    ("vue", "Vue.js"),
    ("vuejs", "Vue.js"),
    ("vue.js", "Vue.js"),
    ("ember", "Ember.js"),
    ("ember.js", "Ember.js"),
    ("jquery", "jQuery"),
    ("bootstrap", "Bootstrap"),
    // Backend frameworks
    ("node", "Node.js"),
    ("node.js", "Node.js"),
    ("nodejs", "Node.js"),
    ("express", "Express.js"),
    ("express.js", "Express.js"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("spring", "Spring Boot"),
    ("laravel", "Laravel"),
    ("rails", "Ruby on Rails"),
    ("ruby on rails", "Ruby on Rails"),
    // Data science / ML / AI
    ("ml", "Machine Learning"),
    ("machine learning", "Machine Learning"),
    ("ai", "Artificial Intelligence"),
    ("artificial intelligence", "Artificial Intelligence"),
    ("nlp", "Natural Language Processing"),
    ("natural language processing", "Natural Language Processing"),
    ("tensorflow", "TensorFlow"),
    ("pytorch", "PyTorch"),
    ("scikit-learn", "Scikit-Learn"),
    ("keras", "Keras"),
    ("opencv", "OpenCV"),
    // BI / visualization
    ("tableau", "Tableau"),
    ("power bi", "Power BI"),
    ("qlik", "Qlik"),
    ("lookml", "LookML"),
    ("d3", "D3.js"),
    ("d3.js", "D3.js"),
    ("matplotlib", "Matplotlib"),
    ("seaborn", "Seaborn"),
    // Agile / methodologies
    ("scrum", "Agile Scrum"),
    ("kanban", "Agile Kanban"),
    ("agile", "Agile"),
    ("waterfall", "Waterfall"),
    // APIs / protocols
    ("rest api", "REST API"),
    ("restful", "REST API"),
    ("graphql", "GraphQL"),
    ("soap", "SOAP"),
    ("grpc", "gRPC"),
    // Miscellaneous tools and concepts
    ("git", "Git"),
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
    ("jira", "Jira"),
    ("confluence", "Confluence"),
    ("docker-compose", "Docker Compose"),
    ("microservices", "Microservices"),
    ("oauth", "OAuth"),
    ("jwt", "JWT"),
    ("mvc", "MVC"),
    ("oop", "Object-Oriented Programming"),
    ("functional programming", "Functional Programming"),
    // Mobile development
    ("ios", "iOS"),
    ("android", "Android"),
    ("flutter", "Flutter"),
    ("react native", "React Native"),
    ("xamarin", "Xamarin"),
    // Testing
    ("jest", "Jest"),
    ("mocha", "Mocha"),
    ("selenium", "Selenium"),
    ("cypress", "Cypress"),
    ("junit", "JUnit"),
    ("pytest", "Pytest"),
    // Security
    ("ssl", "SSL"),
    ("tls", "TLS"),
    ("penetration testing", "Penetration Testing"),
    ("vulnerability assessment", "Vulnerability Assessment"),
];

/// Normalize a raw skill token to its canonical display form.
///
/// Unknown tokens come back title-cased rather than erroring, so the
/// function is total over arbitrary model output.
pub fn normalize_skill(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    match SKILL_SYNONYMS.get(key.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => title_case(raw.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_aliases() {
        assert_eq!(normalize_skill("PYTHON3"), "Python");
        assert_eq!(normalize_skill("  k8s "), "Kubernetes");
        assert_eq!(normalize_skill("aws"), "Amazon Web Services");
        assert_eq!(normalize_skill("Node.JS"), "Node.js");
    }

    #[test]
    fn test_normalize_unknown_token_title_cased() {
        assert_eq!(normalize_skill("unknown-tool"), "Unknown-Tool");
        assert_eq!(normalize_skill("some odd skill"), "Some Odd Skill");
        assert_eq!(normalize_skill(""), "");
    }

    #[test]
    fn test_normalize_idempotent_on_canonical_forms() {
        for (_, canonical) in SYNONYM_PAIRS {
            let once = normalize_skill(canonical);
            assert_eq!(normalize_skill(&once), once, "not idempotent for {canonical}");
        }
    }
}
