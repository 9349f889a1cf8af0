//! Test fixtures: config files and the fake ssh client.

/// Stand-in for `ssh`.
///
/// Appends the full argument list to `$FAKE_SSH_ARGS_LOG` and the remote
/// command (last argument) to `$FAKE_SSH_LOG`. Behavior:
/// - `test -d ...` succeeds only when `$FAKE_SSH_STATE/exists` is present
/// - a destination containing `$FAKE_SSH_UNREACHABLE` exits 255
/// - a command containing `$FAKE_SSH_FAIL` prints to stderr and exits
///   `$FAKE_SSH_FAIL_STATUS` (default 1)
pub const FAKE_SSH_SCRIPT: &str = r#"#!/bin/sh
for last; do :; done
printf '%s\n' "$*" >> "$FAKE_SSH_ARGS_LOG"
printf '%s\n' "$last" >> "$FAKE_SSH_LOG"

if [ -n "$FAKE_SSH_UNREACHABLE" ]; then
  case "$*" in
    *"$FAKE_SSH_UNREACHABLE"*)
      echo "ssh: connect to host $FAKE_SSH_UNREACHABLE port 22: No route to host" >&2
      exit 255
      ;;
  esac
fi

case "$last" in
  "test -d "*)
    [ -f "$FAKE_SSH_STATE/exists" ] && exit 0
    exit 1
    ;;
esac

if [ -n "$FAKE_SSH_FAIL" ]; then
  case "$last" in
    *"$FAKE_SSH_FAIL"*)
      echo "fatal: simulated failure of '$last'" >&2
      exit "${FAKE_SSH_FAIL_STATUS:-1}"
      ;;
  esac
fi

echo "ok: $last"
exit 0
"#;

/// Remote directory used by the built-in profiles
pub const DEFAULT_REMOTE_DIR: &str = "/home/rabr5411/sims/DistributedBaseStationClustering.jl";

/// Repository cloned by default
pub const DEFAULT_REPOSITORY: &str =
    "git@gitr.sys.kth.se:rabr5411/DistributedBaseStationClustering.jl.git";

/// A two-host profile plus overridden defaults
pub const CLUSTER_CONFIG: &str = r#"
[defaults]
user = "tester"
remote_dir = "/srv/sims/model"
repository = "https://example.org/lab/model.git"

[[profiles]]
name = "cluster"
hosts = ["node{1..2}.example.org"]

[[profiles]]
name = "laptop"
host = "laptop.local"
user = "me"
port = 2222
remote_dir = "~/sims/model"
"#;
