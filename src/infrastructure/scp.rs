//! SCP command construction
//!
//! Builds the `scp` invocation for a single file:
//!
//! ```text
//! scp [-i key_file] <local_path> user@host:<remote_path>
//! sshpass -f <password_file> scp <local_path> user@host:<remote_path>
//! ```
//!
//! The identity file wins when both auth options are configured. `sshpass` does
//! not exist on Windows, so password auth is refused there before anything runs.

use std::ffi::OsString;

use crate::config::{Auth, TransferSettings};
use crate::domain::{CommandLine, Platform, TransferRequest};
use crate::error::{MirrorError, MirrorResult};

pub const SCP_PROGRAM: &str = "scp";
pub const SSHPASS_PROGRAM: &str = "sshpass";

/// Builder for the secure-copy command line
pub struct ScpCommand;

impl ScpCommand {
    pub fn build(
        request: &TransferRequest,
        settings: &TransferSettings,
        platform: Platform,
    ) -> MirrorResult<CommandLine> {
        let mut cmd = CommandLine::new(SCP_PROGRAM);

        let wrap_with = match &settings.auth {
            Auth::KeyFile(key) => {
                cmd = cmd.arg("-i").arg(key);
                None
            }
            Auth::PasswordFile(file) => {
                if !platform.supports_password_helper() {
                    return Err(MirrorError::PlatformUnsupported);
                }
                Some(file.clone())
            }
            Auth::Ambient => None,
        };

        cmd = cmd
            .arg(request.local_path())
            .arg(request.destination(settings));

        Ok(match wrap_with {
            Some(file) => cmd.wrap(
                SSHPASS_PROGRAM,
                &[OsString::from("-f"), file.into_os_string()],
            ),
            None => cmd,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    fn settings(auth: Auth) -> TransferSettings {
        TransferSettings {
            remote_user: "deploy".to_string(),
            remote_host: "build01".to_string(),
            remote_base_dir: "/srv/app".to_string(),
            local_base_dir: PathBuf::from("/home/dev/app"),
            timeout: Duration::from_secs(5),
            auth,
        }
    }

    fn build(auth: Auth, platform: Platform) -> MirrorResult<CommandLine> {
        let s = settings(auth);
        let request = TransferRequest::new(Path::new("/home/dev/app/src/a.rs"), &s).unwrap();
        ScpCommand::build(&request, &s, platform)
    }

    #[test]
    fn ambient_auth_is_source_then_destination() {
        let cmd = build(Auth::Ambient, Platform::Unix).unwrap();
        assert_eq!(cmd.program, "scp");
        assert_eq!(
            cmd.args_lossy(),
            vec!["/home/dev/app/src/a.rs", "deploy@build01:/srv/app/src/a.rs"]
        );
    }

    #[test]
    fn identity_argument_precedes_source_and_destination() {
        let cmd = build(Auth::KeyFile(PathBuf::from("id_rsa")), Platform::Unix).unwrap();
        assert_eq!(
            cmd.args_lossy(),
            vec![
                "-i",
                "id_rsa",
                "/home/dev/app/src/a.rs",
                "deploy@build01:/srv/app/src/a.rs"
            ]
        );
    }

    #[test]
    fn identity_file_works_on_windows_too() {
        let cmd = build(Auth::KeyFile(PathBuf::from("id_rsa")), Platform::Windows).unwrap();
        assert_eq!(cmd.program, "scp");
    }

    #[test]
    fn password_file_wraps_with_sshpass() {
        let cmd = build(Auth::PasswordFile(PathBuf::from("/pw")), Platform::Unix).unwrap();
        assert_eq!(cmd.program, "sshpass");
        assert_eq!(
            cmd.args_lossy(),
            vec![
                "-f",
                "/pw",
                "scp",
                "/home/dev/app/src/a.rs",
                "deploy@build01:/srv/app/src/a.rs"
            ]
        );
    }

    #[test]
    fn password_file_rejected_on_windows() {
        let err = build(Auth::PasswordFile(PathBuf::from("/pw")), Platform::Windows).unwrap_err();
        assert!(matches!(err, MirrorError::PlatformUnsupported));
    }
}
