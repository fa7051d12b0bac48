//! Container-runtime simulator
//!
//! A scripted stand-in for the docker CLI. Output is canned and the only
//! state it reads or writes is the session's challenge tracker: the run
//! invocation carrying `-p`, `80:80` and `nginx` (any order) is the
//! winning pattern for the docker challenge.

use challenges::ids;

use crate::interpreter::{CommandHandler, CommandOutput, SessionState};
use crate::style;

/// `docker <subcommand> ...`
pub struct DockerCommand;

impl CommandHandler for DockerCommand {
    fn execute(&self, args: &[&str], state: &mut SessionState) -> CommandOutput {
        match args.first() {
            None => usage(),
            Some(&"pull") => pull(args),
            Some(&"images") => images(),
            Some(&"run") => run(args, state),
            Some(&"ps") => ps(state),
            Some(other) => {
                CommandOutput::line(format!("docker: '{}' no es un comando docker.", other))
            }
        }
    }
}

fn usage() -> CommandOutput {
    CommandOutput::lines(vec![
        "".to_string(),
        "Usage:  docker [OPTIONS] COMMAND".to_string(),
        "".to_string(),
        "A self-sufficient runtime for containers".to_string(),
        "".to_string(),
        "Common Commands:".to_string(),
        "  run         Create and run a new container from an image".to_string(),
        "  exec        Execute a command in a running container".to_string(),
        "  ps          List containers".to_string(),
        "  build       Build an image from a Dockerfile".to_string(),
        "  pull        Download an image from a registry".to_string(),
        "  images      List images".to_string(),
        "".to_string(),
        "Run 'docker COMMAND --help' for more information on a command.".to_string(),
    ])
}

fn pull(args: &[&str]) -> CommandOutput {
    match args.get(1) {
        None => CommandOutput::line("docker: \"pull\" requiere al menos 1 argumento."),
        Some(image) => CommandOutput::lines(vec![
            format!("Descargando imagen '{}'...", image),
            "La imagen ha sido descargada con éxito.".to_string(),
        ]),
    }
}

fn images() -> CommandOutput {
    CommandOutput::lines(vec![
        "REPOSITORY    TAG       IMAGE ID       CREATED         SIZE".to_string(),
        "nginx         latest    a6bd71f48f68   2 weeks ago    187MB".to_string(),
        "ubuntu        latest    3b418d7b466a   4 weeks ago    77.8MB".to_string(),
        "hello-world   latest    9c7a54a9a43c   5 months ago   13.3kB".to_string(),
    ])
}

fn run(args: &[&str], state: &mut SessionState) -> CommandOutput {
    let has = |token: &str| args.contains(&token);

    if has("-p") && has("80:80") && has("nginx") {
        let mut lines = vec![
            "Creando contenedor a partir de la imagen 'nginx'...".to_string(),
            "contenedor inicializado con ID abc123def456".to_string(),
            "El servidor web Nginx está funcionando en http://localhost:80".to_string(),
        ];

        if state.tracker.active_id().map(|id| id.as_str()) == Some(ids::DOCKER_BASIC) {
            if let Some(award) = state.tracker.complete(state.store.as_mut()) {
                lines.push(style::success(
                    "¡Felicidades! Has completado el desafío de configuración de Docker correctamente.",
                ));
                lines.push(style::accent(&format!("+{} puntos", award.reward)));
            }
        }

        return CommandOutput::lines(lines);
    }

    if has("nginx") {
        return CommandOutput::lines(vec![
            "Creando contenedor a partir de la imagen 'nginx'...".to_string(),
            "contenedor inicializado con ID xyz789".to_string(),
            "NOTA: No has mapeado los puertos. El servidor web no será accesible desde el host."
                .to_string(),
        ]);
    }

    CommandOutput::lines(vec![
        "docker: el comando \"run\" requiere al menos 1 argumento.".to_string(),
        "Consulta 'docker run --help'.".to_string(),
    ])
}

fn ps(state: &SessionState) -> CommandOutput {
    if state.tracker.is_completed() {
        CommandOutput::lines(vec![
            "CONTAINER ID   IMAGE     COMMAND                  CREATED          STATUS          PORTS                NAMES"
                .to_string(),
            "abc123def456   nginx     \"/docker-entrypoint.…\"   2 minutes ago    Up 2 minutes    0.0.0.0:80->80/tcp   eager_beaver"
                .to_string(),
        ])
    } else {
        CommandOutput::line("CONTAINER ID   IMAGE     COMMAND   CREATED   STATUS    PORTS     NAMES")
    }
}
