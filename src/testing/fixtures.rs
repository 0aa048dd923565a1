//! Sector export fixtures

use std::path::PathBuf;
use tempfile::TempDir;

/// Full header of a sector export, in column order.
pub const HEADER: &str = "ID;CODIGO_SETOR;NOME_SETOR;ORGAO;ATIVO;LOGRADOURO;NUMERO;COMPLEMENTO;\
BAIRRO;CIDADE;ESTADO;CEP;TELEFONE;EMAIL;DATA_CRIACAO;DATA_ATUALIZACAO;LATITUDE;LONGITUDE";

/// Write `HEADER` plus `rows` to `name` inside `dir` and return the path.
pub fn write_input(
    dir: &TempDir,
    name: &str,
    rows: &[&str],
) -> Result<PathBuf, std::io::Error> {
    let path = dir.path().join(name);
    let mut content = String::from(HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(&path, content)?;
    Ok(path)
}
