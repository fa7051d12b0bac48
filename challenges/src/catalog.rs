//! Challenge catalog
//!
//! Static descriptors for every challenge the game ships. Only
//! `docker-basic` is playable today; the rest are announced in the UI but
//! locked, and no verification exists for them yet.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Challenge identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChallengeId(String);

impl ChallengeId {
    /// Creates a new challenge id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChallengeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub difficulty: u8,
    pub available: bool,
    pub icon: String,
    pub reward: u32,
    /// Plain-text walkthrough shown in the instructions view. Locked
    /// challenges ship without one.
    pub instructions: Option<String>,
}

/// The set of known challenges.
#[derive(Debug, Clone, Default)]
pub struct ChallengeCatalog {
    challenges: Vec<Challenge>,
}

impl ChallengeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a challenge to the catalog.
    pub fn register(&mut self, challenge: Challenge) {
        self.challenges.push(challenge);
    }

    /// Looks a challenge up by id.
    pub fn find(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id.as_str() == id)
    }

    /// All challenges, in catalog order.
    pub fn all(&self) -> &[Challenge] {
        &self.challenges
    }

    /// The playable subset.
    pub fn available(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter().filter(|c| c.available)
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}

/// Well-known challenge ids
pub mod ids {
    pub const DOCKER_BASIC: &str = "docker-basic";
    pub const KUBERNETES_BASIC: &str = "kubernetes-basic";
    pub const CICD_PIPELINE: &str = "cicd-pipeline";
    pub const MONITORING: &str = "monitoring";
}

const DOCKER_BASIC_INSTRUCTIONS: &str = "\
Desafío Nivel 1: Configuración de Docker

Como SysAdmin principiante, tu tarea es configurar un contenedor Docker básico para ejecutar un servidor web.

Contexto: Tu equipo necesita implementar rápidamente un servidor web para mostrar la página de estado del sistema.

Objetivo: Crear y ejecutar un contenedor Docker que utilice la imagen oficial de Nginx.

Instrucciones:
- Usa el comando docker pull para obtener la imagen de Nginx
- Usa docker run para iniciar un contenedor que exponga el puerto 80
- Verifica que el contenedor esté funcionando con docker ps

Pista: El comando completo debería incluir mapeo de puertos con la opción -p.";

/// Builds the catalog the game ships with.
pub fn default_catalog() -> ChallengeCatalog {
    let mut catalog = ChallengeCatalog::new();

    catalog.register(Challenge {
        id: ChallengeId::new(ids::DOCKER_BASIC),
        title: "Docker Básico".to_string(),
        description:
            "Configura un contenedor Docker con Nginx para servir una página de estado del sistema."
                .to_string(),
        difficulty: 1,
        available: true,
        icon: "🐳".to_string(),
        reward: 100,
        instructions: Some(DOCKER_BASIC_INSTRUCTIONS.to_string()),
    });

    catalog.register(Challenge {
        id: ChallengeId::new(ids::KUBERNETES_BASIC),
        title: "Orquestación con K8s".to_string(),
        description: "Aprende a implementar aplicaciones en un clúster de Kubernetes.".to_string(),
        difficulty: 2,
        available: false,
        icon: "☸️".to_string(),
        reward: 200,
        instructions: None,
    });

    catalog.register(Challenge {
        id: ChallengeId::new(ids::CICD_PIPELINE),
        title: "CI/CD Pipeline".to_string(),
        description:
            "Configura un pipeline de integración y despliegue continuo para una aplicación web."
                .to_string(),
        difficulty: 3,
        available: false,
        icon: "🔄".to_string(),
        reward: 300,
        instructions: None,
    });

    catalog.register(Challenge {
        id: ChallengeId::new(ids::MONITORING),
        title: "Monitoreo y Alertas".to_string(),
        description: "Implementa soluciones de monitoreo para detectar y responder a incidentes."
            .to_string(),
        difficulty: 2,
        available: false,
        icon: "📊".to_string(),
        reward: 250,
        instructions: None,
    });

    catalog
}
