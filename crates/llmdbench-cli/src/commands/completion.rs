// Dweve LLMDBench - LLM serving benchmark explorer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Completion command - shell tab completion

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Generator, Shell};
use std::io;

/// Write a completion script for `cmd` to stdout.
pub fn generate_completion_for_command<G: Generator>(
    generator: G,
    cmd: &mut Command,
) -> Result<(), CliError> {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
    Ok(())
}

/// Installation instructions for a shell's completion script.
///
/// # Examples
///
/// ```
/// use clap_complete::Shell;
/// use llmdbench_cli::commands::print_installation_instructions;
///
/// assert!(print_installation_instructions(Shell::Zsh).contains("~/.zshrc"));
/// ```
pub fn print_installation_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => {
            r#"# Bash: current session
eval "$(llmdbench completion bash)"

# Bash: every session
llmdbench completion bash > ~/.local/share/bash-completion/completions/llmdbench
"#
        }
        Shell::Zsh => {
            r#"# Zsh: current session
eval "$(llmdbench completion zsh)"

# Zsh: every session, add to ~/.zshrc
echo 'eval "$(llmdbench completion zsh)"' >> ~/.zshrc
"#
        }
        Shell::Fish => {
            r#"# Fish
llmdbench completion fish > ~/.config/fish/completions/llmdbench.fish
"#
        }
        Shell::PowerShell => {
            r#"# PowerShell: add to $PROFILE
llmdbench completion powershell | Out-String | Invoke-Expression
"#
        }
        Shell::Elvish => {
            r#"# Elvish: add to ~/.elvish/rc.elv
eval (llmdbench completion elvish)
"#
        }
        _ => "No instructions for this shell\n",
    }
    .to_string()
}
