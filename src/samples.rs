/// A canned email the user can load into the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleEmail {
    pub label: &'static str,
    pub text: &'static str,
}

pub const SAMPLE_EMAILS: &[SampleEmail] = &[
    SampleEmail {
        label: "Pedido de status",
        text: "Ola time, poderiam confirmar o status do contrato enviado ontem? Precisamos do retorno para seguir com o projeto.",
    },
    SampleEmail {
        label: "Solicitacao de ajuste",
        text: "Bom dia, preciso atualizar o cadastro do fornecedor. Em anexo segue a planilha com os dados corrigidos.",
    },
    SampleEmail {
        label: "Agradecimento",
        text: "Obrigado pelo suporte de hoje. Tudo certo por aqui.",
    },
    SampleEmail {
        label: "Fora do tema",
        text: "Pessoal, parabens pelo aniversario da empresa! Foi um evento incrivel.",
    },
];
