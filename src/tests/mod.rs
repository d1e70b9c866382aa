mod reference_vectors;
