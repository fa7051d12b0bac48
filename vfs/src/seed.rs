//! Seeded game disk
//!
//! The fixed tree every terminal session starts with. Contents are the
//! player-visible files of the PixxelOps workspace.

use crate::node::Node;
use crate::VirtualFs;

/// Home directory of the player account. Sessions start here and `cd`
/// without arguments returns here.
pub const HOME_DIR: &str = "/home/admin";

/// Builds the PixxelOps disk image.
pub fn pixxelops_disk() -> VirtualFs {
    let admin = Node::empty_dir()
        .with_entry(
            "documentos",
            Node::empty_dir().with_entry(
                "readme.txt",
                Node::file("Bienvenido a PixxelOps! Este es tu espacio de trabajo."),
            ),
        )
        .with_entry(
            "proyectos",
            Node::empty_dir().with_entry(
                "docker-challenge",
                Node::empty_dir().with_entry(
                    "instrucciones.md",
                    Node::file("Configura un contenedor Docker con Nginx."),
                ),
            ),
        );

    let root = Node::empty_dir()
        .with_entry("home", Node::empty_dir().with_entry("admin", admin))
        .with_entry(
            "etc",
            Node::empty_dir().with_entry("config.conf", Node::file("Configuración del sistema")),
        )
        .with_entry(
            "var",
            Node::empty_dir().with_entry(
                "log",
                Node::empty_dir().with_entry("syslog", Node::file("Historial de eventos del sistema")),
            ),
        );

    VirtualFs::new(root)
}
